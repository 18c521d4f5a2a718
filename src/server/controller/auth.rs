use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::LoginDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::CsrfSession,
        service::{auth::GoogleAuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping login endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Marina</title></head>
  <body>
    <h1>Welcome to Marina</h1>
    <p>Sign in with your Google account to receive a token for the boats API.</p>
    <form action="/oauth_redirect" method="get">
      <button type="submit">Sign in with Google</button>
    </form>
  </body>
</html>
"#;

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google for token exchange.
    pub code: String,
}

/// Welcome page linking to the Google login.
#[utoipa::path(
    get,
    path = "/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Welcome page", content_type = "text/html")
    ),
)]
pub async fn home() -> impl IntoResponse {
    Html(WELCOME_PAGE)
}

/// Starts the Google login.
///
/// Generates a random state token, stores it in the session and redirects the browser
/// to Google's consent screen.
///
/// # Returns
/// - `307 Temporary Redirect` - Redirect to Google
/// - `500 Internal Server Error` - Session store failure
#[utoipa::path(
    get,
    path = "/oauth_redirect",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google's consent screen"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn oauth_redirect(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the Google login.
///
/// Validates the state token, exchanges the code, creates the user on first login and
/// returns the ID token the client should use as its bearer token.
///
/// # Returns
/// - `200 OK` - Login complete
/// - `400 Bad Request` - State token missing or mismatched
/// - `500 Internal Server Error` - Google or database failure
#[utoipa::path(
    get,
    path = "/oauth",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "State token issued by /oauth_redirect"),
        ("code" = String, Query, description = "Authorization code from Google")
    ),
    responses(
        (status = 200, description = "Login complete", body = LoginDto),
        (status = 400, description = "State token mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn oauth_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let auth_service = GoogleAuthService::new(&state.http_client, &state.oauth_client);
    let user_service = UserService::new(&state.db);

    let (profile, id_token) = auth_service.callback(params.0.code).await?;
    let user = user_service.find_or_create(profile).await?;

    Ok((StatusCode::OK, Json(user.into_login_dto(id_token))))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
