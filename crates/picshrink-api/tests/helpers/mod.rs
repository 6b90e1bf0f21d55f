//! Test helpers: build the router against an isolated storage directory.
//!
//! Run from the workspace root: `cargo test -p picshrink-api`.

pub mod fixtures;

use axum_test::TestServer;
use picshrink_api::setup::routes::build_router;
use picshrink_api::state::AppState;
use picshrink_core::Config;
use picshrink_storage::{LocalStorage, Storage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus the storage directory it writes into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Names of leftover temp artifacts in the upload directory.
    pub fn temp_residue(&self) -> Vec<String> {
        stored_files(&self.upload_dir)
            .into_iter()
            .filter(|name| name.starts_with("temp_"))
            .collect()
    }

    /// All filenames currently in the upload directory.
    pub fn stored_files(&self) -> Vec<String> {
        stored_files(&self.upload_dir)
    }
}

fn stored_files(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn test_config(upload_dir: &Path) -> Config {
    Config {
        server_port: 0,
        upload_dir: upload_dir.to_path_buf(),
        cors_origins: vec!["*".to_string()],
        max_upload_bytes: 25 * 1024 * 1024,
        environment: "test".to_string(),
    }
}

fn build_test_app(temp_dir: TempDir, upload_dir: PathBuf) -> TestApp {
    let config = test_config(&upload_dir);
    let storage: Arc<dyn Storage> = Arc::new(LocalStorage::new(&upload_dir));
    let state = Arc::new(AppState::new(config.clone(), storage));
    let router = build_router(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}

/// Setup a test app with a fresh, writable upload directory.
pub fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");
    build_test_app(temp_dir, upload_dir)
}

/// Setup a test app whose upload directory can never be created: its parent
/// path is an existing regular file.
pub fn setup_test_app_with_blocked_storage() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("Failed to write blocker file");
    let upload_dir = blocker.join("uploads");
    build_test_app(temp_dir, upload_dir)
}
