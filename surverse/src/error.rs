//! HTTP error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors a handler can answer with. Upstream failures are not errors
/// here: the clients already degrade them to empty results.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request parameter → 400.
    #[error("{0}")]
    BadRequest(&'static str),
    /// Single-item lookup found nothing → 404.
    #[error("{0}")]
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
