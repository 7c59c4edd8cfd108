// ABOUTME: HTTP handlers for the configuration resource at /config.json.
// ABOUTME: Read streams the file under the shared lock; replace authenticates, decodes fully, then persists.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use fragment_core::ConfigDocument;

use crate::auth::BasicPassword;
use crate::error::ApiError;
use crate::resource::SharedResource;

/// GET /config.json - serve the current document bytes as stored, so a
/// reader sees exactly what the last writer persisted.
pub async fn get_config(State(resource): State<SharedResource>) -> Result<Response, ApiError> {
    let bytes = resource.read_bytes().await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// POST /config.json - replace the document. Only registered when a write
/// password is configured. The candidate is decoded fully into memory
/// before the file is touched, so a rejected or partial body never reaches
/// the filesystem.
pub async fn post_config(
    State(resource): State<SharedResource>,
    BasicPassword(password): BasicPassword,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    if !resource.verify(&password) {
        return Err(ApiError::InvalidPassword);
    }

    let document: ConfigDocument = serde_json::from_slice(&body)?;

    resource.replace(&document).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// OPTIONS /config.json - advertise the methods this instance permits.
pub async fn options_config(State(resource): State<SharedResource>) -> Response {
    (
        StatusCode::NO_CONTENT,
        [(header::ALLOW, resource.allow_header())],
    )
        .into_response()
}
