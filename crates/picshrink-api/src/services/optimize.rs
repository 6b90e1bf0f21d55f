//! Upload optimize pipeline
//!
//! One linear pipeline per request: presence check → directory preparation →
//! extension check → temp persistence → structural probe → quality
//! resolution → decode+resize → JPEG encode+persist → statistics → cleanup.
//! The first failing stage short-circuits the rest; once the temp artifact
//! exists it is removed on every exit path.

use std::path::Path;
use std::sync::Arc;

use picshrink_core::constants::{PROCESSED_PREFIX, TEMP_PREFIX};
use picshrink_core::error::{Artifact, ContentStage};
use picshrink_core::models::OptimizeReport;
use picshrink_core::AppError;
use picshrink_processing::{compression, probe, resize, JpegQuality, ProbeError};

use crate::state::AppState;

/// File payload extracted from the multipart request.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub data: Vec<u8>,
    pub declared_filename: String,
    pub declared_content_type: Option<String>,
}

/// Upload optimize service
pub struct OptimizeService {
    state: Arc<AppState>,
}

impl OptimizeService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Run the full optimize pipeline for one upload.
    ///
    /// `quality_raw` is the untrusted form value; resolution never fails
    /// (see [`JpegQuality::resolve`]).
    pub async fn optimize(
        &self,
        payload: Option<UploadPayload>,
        quality_raw: Option<&str>,
    ) -> Result<OptimizeReport, AppError> {
        // 1. Presence
        let payload = payload.ok_or(AppError::MissingFile)?;

        // The declared content type is informational only; the structural
        // probe and decode are the effective content checks.
        if let Some(ref content_type) = payload.declared_content_type {
            tracing::debug!(content_type = %content_type, "Declared upload content type");
        }

        // 2. Directory preparation
        self.state
            .storage
            .ensure_root()
            .await
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

        // 3. Extension check, before any bytes are written
        let validator = self.state.upload_validator();
        let filename = validator
            .sanitize_filename(&payload.declared_filename)
            .map_err(|e| AppError::UnsupportedType(e.to_string()))?;
        validator
            .validate_extension(&filename)
            .map_err(|e| AppError::UnsupportedType(e.to_string()))?;

        // 4. Temporary persistence
        let temp_key = format!("{}{}", TEMP_PREFIX, filename);
        self.state
            .storage
            .write(&temp_key, payload.data)
            .await
            .map_err(|e| AppError::StorageWriteFailed {
                artifact: Artifact::Temp,
                detail: e.to_string(),
            })?;

        // 5-9 run against the temp artifact; it is removed afterwards no
        // matter which way they went (step 10).
        let outcome = self.process_temp(&temp_key, &filename, quality_raw).await;
        self.cleanup_temp(&temp_key).await;

        match &outcome {
            Ok(report) => {
                tracing::info!(
                    processed_image = %report.processed_filename,
                    original_size = report.original_size,
                    processed_size = report.processed_size,
                    size_reduction_percent = report.size_reduction_percent,
                    "Image optimized"
                );
            }
            Err(err) => {
                tracing::debug!(error_code = err.error_code(), "Optimize pipeline aborted");
            }
        }

        outcome
    }

    /// Stages that operate on the persisted temp artifact.
    async fn process_temp(
        &self,
        temp_key: &str,
        filename: &str,
        quality_raw: Option<&str>,
    ) -> Result<OptimizeReport, AppError> {
        // 5. Content validation: structural probe, no pixel decode yet.
        let temp_data = self
            .state
            .storage
            .read(temp_key)
            .await
            .map_err(|e| AppError::VerificationFailed(e.to_string()))?;

        probe::probe_image(&temp_data).map_err(|e| match e {
            ProbeError::NotAnImage(detail) => AppError::InvalidImageContent {
                stage: ContentStage::Probe,
                detail,
            },
            ProbeError::Fault(detail) => AppError::VerificationFailed(detail),
        })?;

        // 6. Quality resolution (silent fallback, never an error)
        let quality = JpegQuality::resolve(quality_raw);

        // 7. Decode + resize
        let img = resize::decode_image(&temp_data).map_err(|e| AppError::InvalidImageContent {
            stage: ContentStage::Decode,
            detail: e.to_string(),
        })?;

        let resized = resize::shrink(&img).map_err(|e| AppError::ProcessingFailed(e.to_string()))?;

        // 8. Encode + persist, always JPEG regardless of the input format
        let jpeg_data = compression::encode_jpeg(&resized, quality)
            .map_err(|e| AppError::ProcessingFailed(e.to_string()))?;

        let processed_key = processed_filename(filename);
        self.state
            .storage
            .write(&processed_key, jpeg_data.to_vec())
            .await
            .map_err(|e| AppError::StorageWriteFailed {
                artifact: Artifact::Processed,
                detail: e.to_string(),
            })?;

        // 9. Statistics, read back from the artifacts on disk
        let original_size = self
            .state
            .storage
            .size(temp_key)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let processed_size = self
            .state
            .storage
            .size(&processed_key)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(OptimizeReport {
            processed_filename: processed_key,
            original_size,
            processed_size,
            size_reduction_percent: OptimizeReport::reduction_percent(
                original_size,
                processed_size,
            ),
        })
    }

    /// 10. Cleanup: removal failure is logged and never escalates.
    async fn cleanup_temp(&self, temp_key: &str) {
        if let Err(e) = self.state.storage.delete(temp_key).await {
            tracing::warn!(error = %e, key = %temp_key, "Failed to remove temp file");
        }
    }
}

/// Derived output name: `processed_{stem}.jpg`, whatever the input format.
fn processed_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    format!("{}{}.jpg", PROCESSED_PREFIX, stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_filename_swaps_extension_for_jpg() {
        assert_eq!(processed_filename("photo.png"), "processed_photo.jpg");
        assert_eq!(processed_filename("photo.jpeg"), "processed_photo.jpg");
        assert_eq!(processed_filename("animation.gif"), "processed_animation.jpg");
    }

    #[test]
    fn processed_filename_keeps_inner_dots() {
        assert_eq!(
            processed_filename("my.holiday.photo.png"),
            "processed_my.holiday.photo.jpg"
        );
    }
}
