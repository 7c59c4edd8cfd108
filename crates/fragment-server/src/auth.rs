// ABOUTME: Basic-auth extractor pulling the shared write password out of a request.
// ABOUTME: Rejection is ApiError::PasswordRequired, so a missing credential maps to 401.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use base64::{Engine as _, engine::general_purpose};

use crate::error::ApiError;

/// The password half of an `Authorization: Basic` credential. The username
/// is accepted and ignored; only the shared write password matters.
pub struct BasicPassword(pub String);

impl BasicPassword {
    fn parse(header: &str) -> Option<String> {
        let (scheme, encoded) = header.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("Basic") {
            return None;
        }

        let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
        let credentials = String::from_utf8(decoded).ok()?;
        let (_user, password) = credentials.split_once(':')?;

        Some(password.to_string())
    }
}

impl<S> FromRequestParts<S> for BasicPassword
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::parse)
            .map(Self)
            .ok_or(ApiError::PasswordRequired)
    }
}
