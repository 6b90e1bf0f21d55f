//! Index page and favicon.

use axum::http::StatusCode;
use axum::response::Html;

/// Upload page, embedded at compile time.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Browsers request this unprompted; answer 204 instead of a 404.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
