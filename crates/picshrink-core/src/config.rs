//! Configuration module
//!
//! Env-driven configuration with sensible defaults. A `.env` file in the
//! working directory is honored via dotenvy.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub upload_dir: PathBuf,
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Variables: `PICSHRINK_PORT`, `PICSHRINK_UPLOAD_DIR`,
    /// `PICSHRINK_CORS_ORIGINS` (comma-separated, `*` for any),
    /// `PICSHRINK_MAX_UPLOAD_BYTES`, `ENVIRONMENT`.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let server_port = env_parsed("PICSHRINK_PORT", DEFAULT_PORT)?;
        let upload_dir = PathBuf::from(
            env::var("PICSHRINK_UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
        );
        let cors_origins = env::var("PICSHRINK_CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let max_upload_bytes = env_parsed("PICSHRINK_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config {
            server_port,
            upload_dir,
            cors_origins,
            max_upload_bytes,
            environment,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_bytes == 0 {
            anyhow::bail!("PICSHRINK_MAX_UPLOAD_BYTES must be greater than zero");
        }
        if self.upload_dir.as_os_str().is_empty() {
            anyhow::bail!("PICSHRINK_UPLOAD_DIR must not be empty");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.to_lowercase().as_str(), "production" | "prod")
    }
}

/// Parse an env var, falling back to `default` when unset. A set-but-invalid
/// value is a startup error rather than a silent fallback.
fn env_parsed<T>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
