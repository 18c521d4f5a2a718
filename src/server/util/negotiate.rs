//! Content-type and accept header checks.
//!
//! Bodies are taken as raw bytes so the 415, 400 and 406 checks run in the order
//! each endpoint documents instead of failing inside an extractor.

use axum::{
    body::Bytes,
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

const APPLICATION_JSON: &str = "application/json";

/// Rejects request bodies not declared as JSON.
///
/// # Returns
/// - `Ok(())` - `Content-Type` is `application/json`, parameters allowed
/// - `Err(AppError::UnsupportedMediaType)` - Header missing or another media type
pub fn require_json_body(headers: &HeaderMap) -> Result<(), AppError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|media| media.trim().eq_ignore_ascii_case(APPLICATION_JSON))
        .unwrap_or(false);

    if is_json {
        Ok(())
    } else {
        Err(AppError::UnsupportedMediaType)
    }
}

/// Whether the client accepts a JSON response.
///
/// A missing `Accept` header accepts anything.
pub fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
    else {
        return true;
    };

    accept.split(',').any(|range| {
        let media = range.split(';').next().unwrap_or("").trim();
        media.eq_ignore_ascii_case(APPLICATION_JSON)
            || media == "*/*"
            || media.eq_ignore_ascii_case("application/*")
    })
}

/// Rejects requests whose `Accept` header excludes JSON.
pub fn require_json_response(headers: &HeaderMap) -> Result<(), AppError> {
    if accepts_json(headers) {
        Ok(())
    } else {
        Err(AppError::NotAcceptable)
    }
}

/// Deserializes a JSON request body.
///
/// # Returns
/// - `Ok(T)` - Body parsed
/// - `Err(AppError::BadRequest)` - Body is not valid JSON for `T`
pub fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::BadRequest("The request body is not valid JSON.".to_string())
    })
}
