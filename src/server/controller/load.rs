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
        load::{LoadDto, LoadInputDto, PaginatedLoadsDto},
    },
    server::{
        error::{relationship::RelationshipError, AppError},
        model::load::{load_link, CreateLoadParams, UpdateLoadParams},
        service::{
            load::{LoadService, LOAD_NOT_FOUND},
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

/// Tag for grouping load endpoints in OpenAPI documentation
pub static LOAD_TAG: &str = "load";

const MISSING_CREATE_ATTRIBUTES: &str =
    "The request object is missing at least one of the required attributes";
const MISSING_UPDATE_ATTRIBUTES: &str = "The request object is missing required attributes.";

/// POST /loads - Create an unassigned load
///
/// # Returns
/// - `201 Created` - The new load
/// - `400 Bad Request` - Body is not JSON or an attribute is missing
/// - `406 Not Acceptable` - Client does not accept JSON
/// - `415 Unsupported Media Type` - Body not sent as JSON
#[utoipa::path(
    post,
    path = "/loads",
    tag = LOAD_TAG,
    request_body = LoadInputDto,
    responses(
        (status = 201, description = "Load created", body = LoadDto),
        (status = 400, description = "Missing attributes", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    require_json_body(&headers)?;
    let dto: LoadInputDto = parse_json_body(&body)?;

    let params = CreateLoadParams::from_dto(dto)
        .ok_or_else(|| AppError::BadRequest(MISSING_CREATE_ATTRIBUTES.to_string()))?;

    require_json_response(&headers)?;

    let load = LoadService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(load.into_dto(&state.app_url))))
}

/// GET /loads - List all loads, five per page
///
/// # Returns
/// - `200 OK` - One page of loads, with a `next` link while more remain
/// - `400 Bad Request` - Cursor is not valid
#[utoipa::path(
    get,
    path = "/loads",
    tag = LOAD_TAG,
    params(CursorQuery),
    responses(
        (status = 200, description = "One page of loads", body = PaginatedLoadsDto),
        (status = 400, description = "Invalid cursor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loads(
    State(state): State<AppState>,
    Query(query): Query<CursorQuery>,
) -> Result<impl IntoResponse, AppError> {
    let cursor = parse_cursor(query.cursor.as_deref())?;

    let page = LoadService::new(&state.db).list(cursor).await?;

    Ok((StatusCode::OK, Json(page.into_dto(&state.app_url))))
}

/// GET /loads/{load_id} - Get a load
///
/// # Returns
/// - `200 OK` - The load, with its carrier when on a boat
/// - `404 Not Found` - No such load
/// - `406 Not Acceptable` - Client does not accept JSON
#[utoipa::path(
    get,
    path = "/loads/{load_id}",
    tag = LOAD_TAG,
    params(("load_id" = i32, Path, description = "Load id")),
    responses(
        (status = 200, description = "The load", body = LoadDto),
        (status = 404, description = "Load not found", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(load_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_json_response(&headers)?;

    let load_id = parse_id(&load_id, LOAD_NOT_FOUND)?;
    let load = LoadService::new(&state.db).get(load_id).await?;

    Ok((StatusCode::OK, Json(load.into_dto(&state.app_url))))
}

/// PATCH /loads/{load_id} - Edit some attributes of a load
///
/// # Returns
/// - `200 OK` - The edited load
/// - `400 Bad Request` - Body is not JSON or carries no attribute
/// - `404 Not Found` - No such load
/// - `406 Not Acceptable` - Client does not accept JSON
/// - `415 Unsupported Media Type` - Body not sent as JSON
#[utoipa::path(
    patch,
    path = "/loads/{load_id}",
    tag = LOAD_TAG,
    params(("load_id" = i32, Path, description = "Load id")),
    request_body = LoadInputDto,
    responses(
        (status = 200, description = "Load edited", body = LoadDto),
        (status = 400, description = "No attribute given", body = ErrorDto),
        (status = 404, description = "Load not found", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(load_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    require_json_body(&headers)?;
    let dto: LoadInputDto = parse_json_body(&body)?;

    let load_id = parse_id(&load_id, LOAD_NOT_FOUND)?;
    let params = UpdateLoadParams::partial(load_id, dto)
        .ok_or_else(|| AppError::BadRequest(MISSING_UPDATE_ATTRIBUTES.to_string()))?;

    require_json_response(&headers)?;

    let load = LoadService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(load.into_dto(&state.app_url))))
}

/// PUT /loads/{load_id} - Replace every attribute of a load
///
/// # Returns
/// - `303 See Other` - Load replaced, `Location` names the load
/// - `400 Bad Request` - Body is not JSON or an attribute is missing
/// - `404 Not Found` - No such load
/// - `406 Not Acceptable` - Client does not accept JSON
/// - `415 Unsupported Media Type` - Body not sent as JSON
#[utoipa::path(
    put,
    path = "/loads/{load_id}",
    tag = LOAD_TAG,
    params(("load_id" = i32, Path, description = "Load id")),
    request_body = LoadInputDto,
    responses(
        (status = 303, description = "Load replaced", body = LoadDto),
        (status = 400, description = "Missing attributes", body = ErrorDto),
        (status = 404, description = "Load not found", body = ErrorDto),
        (status = 406, description = "JSON response not accepted", body = ErrorDto),
        (status = 415, description = "Body is not JSON", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_load(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(load_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    require_json_body(&headers)?;
    let dto: LoadInputDto = parse_json_body(&body)?;

    let load_id = parse_id(&load_id, LOAD_NOT_FOUND)?;
    let params = UpdateLoadParams::full(load_id, dto)
        .ok_or_else(|| AppError::BadRequest(MISSING_UPDATE_ATTRIBUTES.to_string()))?;

    require_json_response(&headers)?;

    let load = LoadService::new(&state.db).update(params).await?;
    let location = load_link(&state.app_url, load.id);

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location)],
        Json(load.into_dto(&state.app_url)),
    ))
}

/// DELETE /loads/{load_id} - Delete a load and take it off its boat
///
/// # Returns
/// - `204 No Content` - Load deleted
/// - `404 Not Found` - No such load
#[utoipa::path(
    delete,
    path = "/loads/{load_id}",
    tag = LOAD_TAG,
    params(("load_id" = i32, Path, description = "Load id")),
    responses(
        (status = 204, description = "Load deleted"),
        (status = 404, description = "Load not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_load(
    State(state): State<AppState>,
    Path(load_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let load_id = parse_id_or(&load_id, || RelationshipError::LoadNotFound)?;

    RelationshipService::new(&state.db)
        .delete_load(load_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
