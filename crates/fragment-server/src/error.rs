// ABOUTME: Error type for the configuration resource, one variant per failure class.
// ABOUTME: Maps each variant to its HTTP status at the response boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the configuration resource. Each variant carries
/// enough to pick the right status code, so a credential failure is never
/// collapsed into a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("password required")]
    PasswordRequired,

    #[error("invalid password")]
    InvalidPassword,

    #[error("invalid config document: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::PasswordRequired => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::InvalidPassword => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::MalformedBody(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Io(err) => {
                tracing::error!("configuration i/o failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "configuration store error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
