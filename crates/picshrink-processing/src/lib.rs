//! Image validation and transformation for the upload pipeline.
//!
//! Validation of an upload happens in three stages, each with its own error
//! surface: filename/extension checks ([`validator`]), a cheap structural
//! probe that parses headers without touching pixel data ([`probe`]), and the
//! full decode that feeds resizing ([`resize`]). Re-encoding is always JPEG
//! ([`compression`]).

pub mod compression;
pub mod probe;
pub mod resize;
pub mod validator;

pub use compression::JpegQuality;
pub use probe::{probe_image, ProbeError};
pub use validator::{UploadValidator, ValidationError};
