use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{
    basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Message returned for every rejected bearer token.
pub const INVALID_TOKEN_MESSAGE: &str = "JWT is invalid / missing.";

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No `Authorization: Bearer` header was sent.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request did not carry a bearer token")]
    MissingToken,

    /// The bearer token failed decoding, signature, expiry, issuer or audience checks.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token was signed with a key Google does not publish.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No signing key found for key id {0:?}")]
    UnknownKeyId(Option<String>),

    /// Exchanging the authorization code with Google failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(
        #[from]
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ),

    /// Google's token response did not include an ID token.
    ///
    /// Happens when the `openid` scope was not granted. Results in a 500 Internal
    /// Server Error response.
    #[error("Token response did not contain an id_token")]
    MissingIdToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `MissingToken` / `InvalidToken` / `UnknownKeyId` → 401 Unauthorized with
///   "JWT is invalid / missing."
/// - Other errors → 500 Internal Server Error with generic message
///
/// Rejected tokens are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken(_) | Self::UnknownKeyId(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: INVALID_TOKEN_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
