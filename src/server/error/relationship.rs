use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of the boat and load relationship rules.
///
/// Owner mismatches are split by operation: assigning reports `Unauthorized` while
/// removing and deleting report `Forbidden`. Both render as 403.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RelationshipError {
    /// Assign target boat or load does not exist.
    #[error("The specified boat and/or load does not exist.")]
    BoatOrLoadNotFound,

    /// Remove target is missing or the load is not carried by this boat.
    #[error("No boat with this boat_id is loaded with the load with this load_id")]
    NotCarried,

    #[error("No boat with this boat_id exists.")]
    BoatNotFound,

    #[error("No load with this load_id exists.")]
    LoadNotFound,

    /// Caller does not own the boat a load is being assigned to.
    #[error("You are not authorized to perform this action.")]
    Unauthorized,

    /// Caller does not own the boat being modified.
    #[error("{0}")]
    Forbidden(String),

    /// The load already has a carrier.
    #[error("The load is already loaded on another boat.")]
    AlreadyLoaded,
}

/// Converts relationship errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For the missing boat/load variants
/// - 403 Forbidden - For `Unauthorized`, `Forbidden` and `AlreadyLoaded`
impl IntoResponse for RelationshipError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BoatOrLoadNotFound
            | Self::NotCarried
            | Self::BoatNotFound
            | Self::LoadNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized | Self::Forbidden(_) | Self::AlreadyLoaded => {
                tracing::debug!("Relationship change rejected: {}", self);
                StatusCode::FORBIDDEN
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
