use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        boat::{BoatDto, BoatInputDto, PaginatedBoatsDto},
    },
    server::{
        error::{relationship::RelationshipError, AppError},
        middleware::auth::AuthGuard,
        model::boat::{boat_link, CreateBoatParams, UpdateBoatParams},
        service::{
            boat::{BoatService, BOAT_NOT_FOUND},
            relationship::RelationshipService,
        },
        state::AppState,
        util::{
            negotiate::{parse_json_body, require_json_body, require_json_response},
            pagination::{parse_cursor, CursorQuery},
            path::{parse_id, parse_id_or},
        },
    },
};

/// Tag for grouping boat endpoints in OpenAPI documentation
pub static BOAT_TAG: &str = "boat";

const MISSING_CREATE_ATTRIBUTES: &str =
    "The request object is missing at least one of the required attributes.";
const MISSING_UPDATE_ATTRIBUTES: &str = "The request object is missing required attributes.";
const NAME_NOT_UNIQUE: &str = "The name given is not unique and already exists.";

/// Rejects a name already used by another boat.
async fn ensure_name_available(
    service: &BoatService<'_>,
    name: Option<&str>,
    excluding_id: Option<i32>,
) -> Result<(), AppError> {
    let Some(name) = name else {
        return Ok(());
    };

    if service.name_available(name, excluding_id).await? {
        Ok(())
    } else {
        Err(AppError::Forbidden(NAME_NOT_UNIQUE.to_string()))
    }
}

/// POST /boats - Create a boat owned by the caller
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `201 Created` - The new boat
/// - `400 Bad Request` - Body is not JSON or an attribute is missing
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Another boat already uses the name
/// - `406 Not Acceptable` - Client does not accept JSON
/// - `415 Unsupported Media Type` - Body not sent as JSON
#[utoipa::path(
    post,
    path = "/boats",
    tag = BOAT_TAG,
    request_body = BoatInputDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Boat created", body = BoatDto),
        (status = 400, description = "Missing attributes", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Name already in use", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    require_json_body(&headers)?;
    let dto: BoatInputDto = parse_json_body(&body)?;

    let params = CreateBoatParams::from_dto(dto, user.sub)
        .ok_or_else(|| AppError::BadRequest(MISSING_CREATE_ATTRIBUTES.to_string()))?;

    let service = BoatService::new(&state.db);
    ensure_name_available(&service, Some(&params.name), None).await?;

    require_json_response(&headers)?;

    let boat = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(boat.into_dto(&state.app_url))))
}

/// GET /boats - List the caller's boats, five per page
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - One page of boats, with a `next` link while more remain
/// - `400 Bad Request` - Cursor is not valid
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    get,
    path = "/boats",
    tag = BOAT_TAG,
    params(CursorQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "One page of the caller's boats", body = PaginatedBoatsDto),
        (status = 400, description = "Invalid cursor", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CursorQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    let cursor = parse_cursor(query.cursor.as_deref())?;

    let page = BoatService::new(&state.db).list(&user.sub, cursor).await?;

    Ok((StatusCode::OK, Json(page.into_dto(&state.app_url))))
}

/// GET /boats/{boat_id} - Get one of the caller's boats
///
/// # Access Control
/// - Requires a valid bearer token
/// - Caller must own the boat
///
/// # Returns
/// - `200 OK` - The boat
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to someone else
/// - `404 Not Found` - No such boat
/// - `406 Not Acceptable` - Client does not accept JSON
#[utoipa::path(
    get,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = i32, Path, description = "Boat id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "The boat", body = BoatDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Boat not found", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    let boat_id = parse_id(&boat_id, BOAT_NOT_FOUND)?;
    let boat = BoatService::new(&state.db).get(boat_id, &user.sub).await?;

    require_json_response(&headers)?;

    Ok((StatusCode::OK, Json(boat.into_dto(&state.app_url))))
}

/// PATCH /boats/{boat_id} - Edit some attributes of a boat
///
/// Attributes missing from the body keep their stored values. A rename is copied onto
/// every load the boat carries.
///
/// # Access Control
/// - Requires a valid bearer token
/// - Caller must own the boat
///
/// # Returns
/// - `200 OK` - The edited boat
/// - `400 Bad Request` - Body is not JSON or carries no attribute
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Name in use by another boat, or not the owner
/// - `404 Not Found` - No such boat
/// - `406 Not Acceptable` - Client does not accept JSON
/// - `415 Unsupported Media Type` - Body not sent as JSON
#[utoipa::path(
    patch,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = i32, Path, description = "Boat id")),
    request_body = BoatInputDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Boat edited", body = BoatDto),
        (status = 400, description = "No attribute given", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Name in use or not the owner", body = ErrorDto),
        (status = 404, description = "Boat not found", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    require_json_body(&headers)?;
    let dto: BoatInputDto = parse_json_body(&body)?;

    let boat_id = parse_id(&boat_id, BOAT_NOT_FOUND)?;
    let params = UpdateBoatParams::partial(boat_id, user.sub, dto)
        .ok_or_else(|| AppError::BadRequest(MISSING_UPDATE_ATTRIBUTES.to_string()))?;

    let service = BoatService::new(&state.db);
    ensure_name_available(&service, params.name.as_deref(), Some(boat_id)).await?;

    require_json_response(&headers)?;

    let boat = service.update(params).await?;

    Ok((StatusCode::OK, Json(boat.into_dto(&state.app_url))))
}

/// PUT /boats/{boat_id} - Replace every attribute of a boat
///
/// # Access Control
/// - Requires a valid bearer token
/// - Caller must own the boat
///
/// # Returns
/// - `303 See Other` - Boat replaced, `Location` names the boat
/// - `400 Bad Request` - Body is not JSON or an attribute is missing
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Name in use by another boat, or not the owner
/// - `404 Not Found` - No such boat
/// - `406 Not Acceptable` - Client does not accept JSON
/// - `415 Unsupported Media Type` - Body not sent as JSON
#[utoipa::path(
    put,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = i32, Path, description = "Boat id")),
    request_body = BoatInputDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 303, description = "Boat replaced", body = BoatDto),
        (status = 400, description = "Missing attributes", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Name in use or not the owner", body = ErrorDto),
        (status = 404, description = "Boat not found", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    require_json_body(&headers)?;
    let dto: BoatInputDto = parse_json_body(&body)?;

    let boat_id = parse_id(&boat_id, BOAT_NOT_FOUND)?;
    let params = UpdateBoatParams::full(boat_id, user.sub, dto)
        .ok_or_else(|| AppError::BadRequest(MISSING_UPDATE_ATTRIBUTES.to_string()))?;

    let service = BoatService::new(&state.db);
    ensure_name_available(&service, params.name.as_deref(), Some(boat_id)).await?;

    require_json_response(&headers)?;

    let boat = service.update(params).await?;
    let location = boat_link(&state.app_url, boat.id);

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location)],
        Json(boat.into_dto(&state.app_url)),
    ))
}

/// DELETE /boats/{boat_id} - Delete a boat and unload everything it carries
///
/// # Access Control
/// - Requires a valid bearer token
/// - Caller must own the boat
///
/// # Returns
/// - `204 No Content` - Boat deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to someone else
/// - `404 Not Found` - No such boat
#[utoipa::path(
    delete,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = i32, Path, description = "Boat id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Boat deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Boat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(boat_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    let boat_id = parse_id_or(&boat_id, || RelationshipError::BoatNotFound)?;

    RelationshipService::new(&state.db)
        .delete_boat(boat_id, &user.sub)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /boats - Not supported on the collection
#[utoipa::path(
    put,
    path = "/boats",
    tag = BOAT_TAG,
    security(("BearerAuth" = [])),
    responses(
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 405, description = "Method not allowed", body = ErrorDto)
    ),
)]
pub async fn replace_all_boats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    Err(AppError::MethodNotAllowed(
        "Put on collection not allowed.".to_string(),
    ))
}

/// DELETE /boats - Not supported on the collection
#[utoipa::path(
    delete,
    path = "/boats",
    tag = BOAT_TAG,
    security(("BearerAuth" = [])),
    responses(
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 405, description = "Method not allowed", body = ErrorDto)
    ),
)]
pub async fn delete_all_boats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    Err(AppError::MethodNotAllowed(
        "Delete on collection not allowed.".to_string(),
    ))
}

/// PUT /boats/{boat_id}/loads/{load_id} - Put a load on a boat
///
/// # Access Control
/// - Requires a valid bearer token
/// - Caller must own the boat
///
/// # Returns
/// - `204 No Content` - Load assigned
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Not the owner, or the load is already on a boat
/// - `404 Not Found` - Boat or load does not exist
#[utoipa::path(
    put,
    path = "/boats/{boat_id}/loads/{load_id}",
    tag = BOAT_TAG,
    params(
        ("boat_id" = i32, Path, description = "Boat id"),
        ("load_id" = i32, Path, description = "Load id")
    ),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Load assigned"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner or load already carried", body = ErrorDto),
        (status = 404, description = "Boat or load not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((boat_id, load_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    let boat_id = parse_id_or(&boat_id, || RelationshipError::BoatOrLoadNotFound)?;
    let load_id = parse_id_or(&load_id, || RelationshipError::BoatOrLoadNotFound)?;

    RelationshipService::new(&state.db)
        .assign(boat_id, load_id, &user.sub)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /boats/{boat_id}/loads/{load_id} - Take a load off a boat
///
/// # Access Control
/// - Requires a valid bearer token
/// - Caller must own the boat
///
/// # Returns
/// - `204 No Content` - Load removed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to someone else
/// - `404 Not Found` - The boat does not carry this load
#[utoipa::path(
    delete,
    path = "/boats/{boat_id}/loads/{load_id}",
    tag = BOAT_TAG,
    params(
        ("boat_id" = i32, Path, description = "Boat id"),
        ("load_id" = i32, Path, description = "Load id")
    ),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Load removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Load not on this boat", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((boat_id, load_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.token_verifier, &headers)
        .require()
        .await?;

    let boat_id = parse_id_or(&boat_id, || RelationshipError::NotCarried)?;
    let load_id = parse_id_or(&load_id, || RelationshipError::NotCarried)?;

    RelationshipService::new(&state.db)
        .remove(boat_id, load_id, &user.sub)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
