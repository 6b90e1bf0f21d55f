//! Application state shared across handlers.

use picshrink_core::constants::ALLOWED_EXTENSIONS;
use picshrink_core::Config;
use picshrink_processing::UploadValidator;
use picshrink_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    /// Validator over the fixed extension allow-set.
    pub fn upload_validator(&self) -> UploadValidator {
        UploadValidator::new(
            ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        )
    }
}
