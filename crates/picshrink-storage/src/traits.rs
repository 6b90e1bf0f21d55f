//! Storage abstraction trait
//!
//! This module defines the Storage trait the upload pipeline and serving
//! route are written against.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Keys are bare filenames inside a single flat directory. Backends must
/// reject keys that resolve outside it.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create the storage directory if it does not exist yet.
    async fn ensure_root(&self) -> StorageResult<()>;

    /// Write `data` under `key`, overwriting any existing file.
    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Read the full contents stored under `key`.
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete the file stored under `key`. Deleting a missing key is a no-op.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether `key` exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Size in bytes of the file stored under `key`.
    async fn size(&self, key: &str) -> StorageResult<u64>;
}
