//! Bearer token guard for protected endpoints.
//!
//! Protected endpoints identify the caller by the `sub` claim of a Google ID token sent
//! as `Authorization: Bearer <token>`. The guard runs before any other request check so
//! that an unauthenticated request always receives 401.

use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::IdTokenVerifier,
};

/// Caller identity established from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Subject identifier, compared against boat owners.
    pub sub: String,
}

pub struct AuthGuard<'a> {
    verifier: &'a IdTokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(verifier: &'a IdTokenVerifier, headers: &'a HeaderMap) -> Self {
        Self { verifier, headers }
    }

    /// Requires a valid bearer token.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Token verified
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer token was sent
    /// - `Err(AppError::AuthErr(_))` - Token failed verification
    pub async fn require(&self) -> Result<AuthenticatedUser, AppError> {
        let Some(token) = extract_bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.verifier.verify(token).await?;

        Ok(AuthenticatedUser { sub: claims.sub })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as missing.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
