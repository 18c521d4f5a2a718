//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. Every error body
//! has the shape `{"Error": "<message>"}`.

pub mod auth;
pub mod config;
pub mod relationship;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, relationship::RelationshipError},
};

/// Methods advertised by the `Allow` header on a rejected collection request.
const BOATS_COLLECTION_ALLOW: &str = "GET, POST";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` and `RelationshipError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400 for login state mismatch, 401 for bad bearer tokens, 500 otherwise).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Boat and load relationship rule violation.
    ///
    /// Delegates to `RelationshipError::into_response()` (404 or 403).
    #[error(transparent)]
    RelationshipErr(#[from] RelationshipError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// the login flow from validating its state token.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when calls to Google fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The caller may not act on the resource, or the request breaks a uniqueness rule.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Forbidden(String),

    /// The request body is not declared as JSON.
    ///
    /// Results in 415 Unsupported Media Type.
    #[error("Server only accepts application/json data.")]
    UnsupportedMediaType,

    /// The client does not accept a JSON response.
    ///
    /// Results in 406 Not Acceptable.
    #[error("The requested response content type is not supported.")]
    NotAcceptable,

    /// Method used on the boats collection that the collection does not support.
    ///
    /// Results in 405 Method Not Allowed with an `Allow: GET, POST` header.
    #[error("{0}")]
    MethodNotAllowed(String),
}

impl AppError {
    /// Builds the JSON error body for a status code and message.
    fn json(status: StatusCode, message: String) -> Response {
        (status, Json(ErrorDto { error: message })).into_response()
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication and relationship errors delegate to their own response handling,
/// while other errors use standard mappings. Internal errors are logged with full
/// details but return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 403 Forbidden - For `Forbidden` variant
/// - 404 Not Found - For `NotFound` variant
/// - 405 Method Not Allowed - For `MethodNotAllowed` variant
/// - 406 Not Acceptable - For `NotAcceptable` variant
/// - 415 Unsupported Media Type - For `UnsupportedMediaType` variant
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr` and `RelationshipErr`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::RelationshipErr(err) => err.into_response(),
            Self::NotFound(msg) => Self::json(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => Self::json(StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => Self::json(StatusCode::FORBIDDEN, msg),
            Self::UnsupportedMediaType => {
                let msg = self.to_string();
                Self::json(StatusCode::UNSUPPORTED_MEDIA_TYPE, msg)
            }
            Self::NotAcceptable => {
                let msg = self.to_string();
                Self::json(StatusCode::NOT_ACCEPTABLE, msg)
            }
            Self::MethodNotAllowed(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, BOATS_COLLECTION_ALLOW)],
                Json(ErrorDto { error: msg }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
