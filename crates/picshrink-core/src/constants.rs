//! Shared constants for the upload pipeline.

/// File extensions accepted for upload (lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// JPEG quality used when the caller supplies none, an unparsable value,
/// or a value outside [0, 100].
pub const DEFAULT_JPEG_QUALITY: u8 = 50;

/// Fixed downscale ratio applied to both dimensions.
pub const RESIZE_RATIO: f64 = 0.5;

/// Prefix for the temporary artifact written during validation.
pub const TEMP_PREFIX: &str = "temp_";

/// Prefix for the persisted, re-encoded artifact.
pub const PROCESSED_PREFIX: &str = "processed_";
