//! Error types for the Cropfeed HTTP layer.
//!
//! [`ApiError`] unifies all request-time failure modes into a single enum
//! that converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cropfeed_core::FeedError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Loading or serving recorded data failed.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// An internal error occurred (e.g. a blocking task was cancelled).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        // Feed errors already name the failing source.
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
