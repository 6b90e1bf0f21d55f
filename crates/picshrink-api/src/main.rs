use std::sync::Arc;

use picshrink_api::{setup, state::AppState, telemetry};
use picshrink_core::Config;
use picshrink_storage::{LocalStorage, Storage};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    telemetry::init_tracing();

    let storage: Arc<dyn Storage> = Arc::new(LocalStorage::new(&config.upload_dir));
    storage.ensure_root().await?;

    let state = Arc::new(AppState::new(config.clone(), storage));
    let router = setup::routes::build_router(&config, state)?;

    setup::server::start_server(&config, router).await?;

    Ok(())
}
