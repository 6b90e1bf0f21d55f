pub mod optimize;

pub use optimize::{OptimizeService, UploadPayload};
