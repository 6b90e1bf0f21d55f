//! Core types for the picshrink image optimizer: error taxonomy,
//! configuration, shared constants, and response models.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, LogLevel};
