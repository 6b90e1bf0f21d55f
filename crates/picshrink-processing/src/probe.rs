//! Structural image verification (validation phase one).
//!
//! The probe confirms the bytes parse as a supported image format by sniffing
//! magic bytes and reading the header, without decoding pixel data. A
//! separate full decode happens later in the pipeline; the two stages report
//! different errors and must stay distinct.

use image::{ImageError, ImageReader};
use std::io::Cursor;

/// Probe failure classification.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The bytes are not a parseable image of any supported format.
    #[error("not a valid image: {0}")]
    NotAnImage(String),

    /// The probe itself failed for an unexpected reason (I/O, limits).
    #[error("verification fault: {0}")]
    Fault(String),
}

/// Verify that `data` is structurally a supported image and return its
/// dimensions. Reads format magic and header only; pixel data stays
/// untouched.
pub fn probe_image(data: &[u8]) -> Result<(u32, u32), ProbeError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ProbeError::Fault(format!("format sniffing failed: {}", e)))?;

    if reader.format().is_none() {
        return Err(ProbeError::NotAnImage(
            "unrecognized image format".to_string(),
        ));
    }

    reader.into_dimensions().map_err(|e| match e {
        ImageError::Decoding(_) | ImageError::Unsupported(_) => {
            ProbeError::NotAnImage(e.to_string())
        }
        other => ProbeError::Fault(other.to_string()),
    })
}
