//! Error types module
//!
//! All request failures are unified under the `AppError` enum. Each variant
//! knows its HTTP status, machine-readable code, client-facing message, and
//! log level, so the HTTP layer can render and log errors uniformly.
//!
//! Client-side failures (400) carry specific, actionable messages. Server-side
//! failures (500) carry a generic message; the detailed cause is logged, never
//! returned to the caller.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for rejected-but-handled input
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Which validation stage rejected the upload content. The structural probe
/// and the full decode report distinct client messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStage {
    Probe,
    Decode,
}

/// Which artifact a storage write was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Temp,
    Processed,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no file in upload request")]
    MissingFile,

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("invalid image content at {stage:?}: {detail}")]
    InvalidImageContent { stage: ContentStage, detail: String },

    #[error("storage directory unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage write failed for {artifact:?} artifact: {detail}")]
    StorageWriteFailed { artifact: Artifact, detail: String },

    #[error("image verification failed: {0}")]
    VerificationFailed(String),

    #[error("image processing failed: {0}")]
    ProcessingFailed(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata per variant: (http_status, error_code, log_level).
/// The client message stays per-variant below for dynamic content.
fn static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::MissingFile => (400, "MISSING_FILE", LogLevel::Debug),
        AppError::UnsupportedType(_) => (400, "UNSUPPORTED_TYPE", LogLevel::Debug),
        AppError::InvalidImageContent { .. } => (400, "INVALID_IMAGE_CONTENT", LogLevel::Warn),
        AppError::StorageUnavailable(_) => (500, "STORAGE_UNAVAILABLE", LogLevel::Error),
        AppError::StorageWriteFailed { .. } => (500, "STORAGE_WRITE_FAILED", LogLevel::Error),
        AppError::VerificationFailed(_) => (500, "VERIFICATION_FAILED", LogLevel::Error),
        AppError::ProcessingFailed(_) => (500, "PROCESSING_FAILED", LogLevel::Error),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => {
            (500, "INTERNAL_ERROR", LogLevel::Error)
        }
    }
}

impl AppError {
    pub fn http_status_code(&self) -> u16 {
        static_metadata(self).0
    }

    pub fn error_code(&self) -> &'static str {
        static_metadata(self).1
    }

    pub fn log_level(&self) -> LogLevel {
        static_metadata(self).2
    }

    /// Message returned to the caller. 400s are specific so the client can
    /// act on them; 500s never leak the underlying cause.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::MissingFile => "No image uploaded!",
            AppError::UnsupportedType(_) => "Invalid file type! Only image files are allowed.",
            AppError::InvalidImageContent { stage, .. } => match stage {
                ContentStage::Probe => "Uploaded file is not a valid image!",
                ContentStage::Decode => "Invalid image file!",
            },
            AppError::StorageUnavailable(_) => {
                "Server error: Unable to prepare upload directory."
            }
            AppError::StorageWriteFailed { artifact, .. } => match artifact {
                Artifact::Temp => "Server error: Unable to save uploaded file.",
                Artifact::Processed => "Server error: Unable to save processed image.",
            },
            AppError::VerificationFailed(_) => "Server error: Unable to verify file type.",
            AppError::ProcessingFailed(_) => "Server error: Unable to process image.",
            AppError::NotFound(_) => "File not found.",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "An unexpected error occurred. Please try again."
            }
        }
    }

    /// Full internal message, for logs only.
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::InternalWithSource { message, source } => {
                format!("{}: {}", message, source)
            }
            other => other.to_string(),
        }
    }
}
