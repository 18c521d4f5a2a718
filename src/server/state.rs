//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for Google API requests
//! - OAuth2 client for Google authentication
//! - ID token verifier with its signing key cache
//! - Application URL for generating links

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EndpointNotSet, EndpointSet, ExtraTokenFields, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::service::token::IdTokenVerifier;

/// Extra fields Google returns from the token endpoint.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GoogleTokenFields {
    /// Signed ID token, present when the `openid` scope was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl ExtraTokenFields for GoogleTokenFields {}

/// Token endpoint response carrying Google's extra fields.
pub(crate) type GoogleTokenResponse = StandardTokenResponse<GoogleTokenFields, BasicTokenType>;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    GoogleTokenResponse,
    StandardTokenIntrospectionResponse<GoogleTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned for each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `IdTokenVerifier` shares its key cache through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with no redirects to prevent SSRF vulnerabilities. Used for the
    /// token exchange, the People API and fetching signing keys.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google login flow.
    pub oauth_client: OAuth2Client,

    /// Verifies bearer ID tokens on protected endpoints.
    pub token_verifier: IdTokenVerifier,

    /// Application base URL for generating `self` and `next` links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Google authentication
    /// - `token_verifier` - Verifier for bearer ID tokens
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        token_verifier: IdTokenVerifier,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            token_verifier,
            app_url,
        }
    }
}
