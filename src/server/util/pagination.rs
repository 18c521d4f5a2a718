//! Keyset pagination cursors.
//!
//! A cursor is the id of the last row on the previous page written as a decimal
//! string. Pages are ordered by ascending id, so the next page starts after it.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::error::AppError;

/// Query string accepted by paginated collection endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CursorQuery {
    /// Cursor taken from the `next` link of the previous page.
    pub cursor: Option<String>,
}

/// Number of entries returned per page.
pub const PAGE_SIZE: u64 = 5;

/// Parses an optional cursor from the query string.
///
/// # Arguments
/// - `cursor` - Raw `cursor` query parameter, if present
///
/// # Returns
/// - `Ok(None)` - No cursor, start from the first page
/// - `Ok(Some(id))` - Continue after the row with this id
/// - `Err(AppError::BadRequest)` - Cursor is not one this server issued
pub fn parse_cursor(cursor: Option<&str>) -> Result<Option<i32>, AppError> {
    match cursor {
        None => Ok(None),
        Some(value) => value
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::BadRequest("The cursor given is not valid.".to_string())),
    }
}

/// Splits a fetch of `PAGE_SIZE + 1` rows into a page and the cursor for the next one.
///
/// # Arguments
/// - `rows` - Rows fetched in ascending id order, at most one more than a page
/// - `id_of` - Extracts the id used as cursor
///
/// # Returns
/// - `(page, Some(cursor))` - More rows remain after this page
/// - `(page, None)` - This is the last page
pub fn split_page<T>(mut rows: Vec<T>, id_of: impl Fn(&T) -> i32) -> (Vec<T>, Option<String>) {
    if rows.len() as u64 <= PAGE_SIZE {
        return (rows, None);
    }

    rows.truncate(PAGE_SIZE as usize);
    let next = rows.last().map(|row| id_of(row).to_string());

    (rows, next)
}
