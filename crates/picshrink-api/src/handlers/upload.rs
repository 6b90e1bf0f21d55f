//! Upload image handler
//!
//! Thin multipart front-end over [`OptimizeService`]: pulls the `image` file
//! field and optional `quality` text field out of the form, then hands off.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use picshrink_core::models::OptimizeResponse;
use picshrink_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::{OptimizeService, UploadPayload};
use crate::state::AppState;

/// Optimize an uploaded image
///
/// Accepts a multipart form with an `image` file field and an optional
/// `quality` text field (0-100; anything else falls back to the default).
/// The image is halved in both dimensions and re-encoded as JPEG.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image processed", body = OptimizeResponse),
        (status = 400, description = "Missing file, unsupported type, or invalid content", body = ErrorResponse),
        (status = 500, description = "Storage or processing failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "optimize_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<OptimizeResponse>, HttpAppError> {
    let (payload, quality_raw) = extract_upload(multipart).await?;

    let service = OptimizeService::new(&state);
    let report = service.optimize(payload, quality_raw.as_deref()).await?;

    Ok(Json(OptimizeResponse::from(report)))
}

/// Pull the `image` file part and `quality` text part out of the form.
///
/// A missing or unreadable `image` part yields `None`; the presence check in
/// the pipeline turns that into the missing-file error. Extra fields are
/// ignored.
async fn extract_upload(
    mut multipart: Multipart,
) -> Result<(Option<UploadPayload>, Option<String>), AppError> {
    let mut payload: Option<UploadPayload> = None;
    let mut quality: Option<String> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "image" => {
                let declared_filename = field.file_name().map(|s| s.to_string());
                let declared_content_type = field.content_type().map(|s| s.to_string());

                let data = match field.bytes().await {
                    Ok(data) => data.to_vec(),
                    Err(e) => {
                        tracing::debug!(error = %e, "Failed to read image field");
                        continue;
                    }
                };

                payload = Some(UploadPayload {
                    data,
                    declared_filename: declared_filename.unwrap_or_default(),
                    declared_content_type,
                });
            }
            "quality" => {
                quality = field.text().await.ok();
            }
            _ => {}
        }
    }

    Ok((payload, quality))
}
