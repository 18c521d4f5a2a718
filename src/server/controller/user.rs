use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /users - List every user who has logged in
///
/// # Returns
/// - `200 OK` - JSON array of users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let users: Vec<UserDto> = user_service
        .get_all()
        .await?
        .into_iter()
        .map(|user| user.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}
