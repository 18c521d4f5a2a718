//! Path parameter parsing.
//!
//! Ids are taken from the path as strings so that a malformed id is reported as a
//! missing resource after authentication, rather than rejected by the extractor first.

use crate::server::error::AppError;

/// Parses a resource id from a path segment.
///
/// # Arguments
/// - `raw` - Path segment as received
/// - `not_found` - Message returned when the segment cannot name any resource
///
/// # Returns
/// - `Ok(i32)` - Positive integer id
/// - `Err(AppError::NotFound)` - Segment is not a positive integer
pub fn parse_id(raw: &str, not_found: &str) -> Result<i32, AppError> {
    parse_id_or(raw, || AppError::NotFound(not_found.to_string()))
}

/// Parses a resource id from a path segment, reporting `error` when it is malformed.
///
/// Used where the missing resource is described by a domain error rather than a message.
pub fn parse_id_or<E>(raw: &str, error: impl FnOnce() -> E) -> Result<i32, AppError>
where
    E: Into<AppError>,
{
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(error().into()),
    }
}
