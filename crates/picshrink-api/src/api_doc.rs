//! OpenAPI document assembly.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::upload::upload_image,
        crate::handlers::serve::serve_upload,
    ),
    components(schemas(
        picshrink_core::models::OptimizeResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "uploads", description = "Image upload, optimization, and retrieval")
    ),
    info(
        title = "picshrink",
        description = "Upload an image, get back a half-size JPEG plus size-reduction statistics."
    )
)]
pub struct ApiDoc;
