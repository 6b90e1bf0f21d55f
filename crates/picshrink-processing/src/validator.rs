use std::path::Path;

/// Validation errors for uploaded files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Missing file extension: {0}")]
    MissingExtension(String),

    #[error("Invalid file extension: {extension} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },
}

/// Upload file validator
///
/// Checks the declared filename before any bytes are written: the name must
/// reduce to a plain basename and carry an extension from the allow-set.
pub struct UploadValidator {
    allowed_extensions: Vec<String>,
}

impl UploadValidator {
    pub fn new(allowed_extensions: Vec<String>) -> Self {
        Self { allowed_extensions }
    }

    /// Reduce a declared filename to a safe basename.
    ///
    /// Browsers and clients may send full paths; only the final component is
    /// kept. Names that still contain parent-directory components or reduce
    /// to nothing are rejected.
    pub fn sanitize_filename(&self, filename: &str) -> Result<String, ValidationError> {
        const MAX_FILENAME_LENGTH: usize = 255;

        let name_only = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");

        if name_only.contains("..") {
            return Err(ValidationError::InvalidFilename(filename.to_string()));
        }

        let sanitized: String = name_only
            .chars()
            .take(MAX_FILENAME_LENGTH)
            .map(|c| {
                if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if sanitized.trim_matches(['_', '.']).is_empty() {
            return Err(ValidationError::InvalidFilename(filename.to_string()));
        }

        Ok(sanitized)
    }

    /// Validate the file extension against the allow-set (case-insensitive).
    /// Returns the lowercased extension.
    pub fn validate_extension(&self, filename: &str) -> Result<String, ValidationError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ValidationError::MissingExtension(filename.to_string()))?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::InvalidExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(extension)
    }
}
