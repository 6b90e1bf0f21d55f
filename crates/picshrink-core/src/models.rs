//! Response models shared between the pipeline and the HTTP layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a successful optimize run, produced by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeReport {
    /// Filename of the persisted JPEG (relative to the upload directory).
    pub processed_filename: String,
    /// Byte size of the uploaded original.
    pub original_size: u64,
    /// Byte size of the re-encoded result.
    pub processed_size: u64,
    /// Percentage size reduction, rounded to 2 decimals. 0 for empty input.
    pub size_reduction_percent: f64,
}

impl OptimizeReport {
    /// Compute the reduction percentage for the given sizes, rounded to
    /// 2 decimal places. An original size of 0 yields 0.
    pub fn reduction_percent(original_size: u64, processed_size: u64) -> f64 {
        if original_size == 0 {
            return 0.0;
        }
        let raw = (original_size as f64 - processed_size as f64) / original_size as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    }
}

/// JSON payload returned by `POST /upload` on success.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptimizeResponse {
    pub message: String,
    pub processed_image: String,
    pub original_size: u64,
    pub processed_size: u64,
    pub size_reduction_percent: f64,
}

impl From<OptimizeReport> for OptimizeResponse {
    fn from(report: OptimizeReport) -> Self {
        OptimizeResponse {
            message: "Image uploaded and processed successfully!".to_string(),
            processed_image: report.processed_filename,
            original_size: report.original_size,
            processed_size: report.processed_size,
            size_reduction_percent: report.size_reduction_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_percent_rounds_to_two_decimals() {
        // 1/3 reduction -> 33.333...% -> 33.33
        assert_eq!(OptimizeReport::reduction_percent(3000, 2000), 33.33);
        assert_eq!(OptimizeReport::reduction_percent(100, 50), 50.0);
    }

    #[test]
    fn reduction_percent_zero_original_is_zero() {
        assert_eq!(OptimizeReport::reduction_percent(0, 0), 0.0);
        assert_eq!(OptimizeReport::reduction_percent(0, 10), 0.0);
    }

    #[test]
    fn reduction_percent_can_be_negative_when_output_grows() {
        // A tiny original re-encoded at high quality can grow.
        assert!(OptimizeReport::reduction_percent(100, 150) < 0.0);
    }

    #[test]
    fn response_from_report_carries_success_message() {
        let report = OptimizeReport {
            processed_filename: "processed_photo.jpg".to_string(),
            original_size: 2048,
            processed_size: 512,
            size_reduction_percent: 75.0,
        };
        let response = OptimizeResponse::from(report);
        assert_eq!(
            response.message,
            "Image uploaded and processed successfully!"
        );
        assert_eq!(response.processed_image, "processed_photo.jpg");
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["original_size"], 2048);
        assert_eq!(json["size_reduction_percent"], 75.0);
    }
}
