//! OAuth2 login with Google

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{GoogleProfile, PersonResponse},
    state::OAuth2Client,
};

/// People API endpoint returning the signed-in user's names.
const GOOGLE_PEOPLE_URL: &str = "https://people.googleapis.com/v1/people/me?personFields=names";

pub struct GoogleAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Builds the Google consent URL with a fresh random state token.
    ///
    /// The `openid` scope makes Google return an ID token alongside the access token;
    /// `profile` grants access to the user's names.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Consent URL and the state token to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Completes the login by exchanging the authorization code.
    ///
    /// # Arguments
    /// - `authorization_code` - Code Google passed to the redirect URL
    ///
    /// # Returns
    /// - `Ok((GoogleProfile, String))` - The user's profile and their ID token
    /// - `Err(AppError::AuthErr)` - Code exchange failed or no ID token was issued
    /// - `Err(AppError::ReqwestErr)` - People API request failed
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<(GoogleProfile, String), AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(AuthError::from)?;

        let id_token = token
            .extra_fields()
            .id_token
            .clone()
            .ok_or(AuthError::MissingIdToken)?;

        let profile = self.fetch_profile(token.access_token().secret()).await?;

        Ok((profile, id_token))
    }

    /// Retrieves the user's subject and names from the People API
    async fn fetch_profile(&self, access_token: &str) -> Result<GoogleProfile, AppError> {
        let person = self
            .http_client
            .get(GOOGLE_PEOPLE_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<PersonResponse>()
            .await?;

        Ok(GoogleProfile::from_person(person))
    }
}
