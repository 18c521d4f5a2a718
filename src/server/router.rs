use axum::{
    routing::{get, put},
    Router,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        boat::{BoatDto, BoatInputDto, BoatLoadDto, PaginatedBoatsDto},
        load::{CarrierDto, LoadDto, LoadInputDto, PaginatedLoadsDto},
        user::{LoginDto, UserDto},
    },
    server::{
        controller::{
            auth::{self, home, oauth_callback, oauth_redirect},
            boat::{
                self, assign_load, create_boat, delete_all_boats, delete_boat, get_boat,
                get_boats, patch_boat, remove_load, replace_all_boats, replace_boat,
            },
            load::{self, create_load, delete_load, get_load, get_loads, patch_load, replace_load},
            user::{self, get_users},
        },
        state::AppState,
    },
};

/// Registers the bearer ID token scheme used by the boat endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Marina API",
        description = "Boats owned by Google-authenticated users and the loads they carry."
    ),
    paths(
        auth::home,
        auth::oauth_redirect,
        auth::oauth_callback,
        user::get_users,
        boat::create_boat,
        boat::get_boats,
        boat::get_boat,
        boat::patch_boat,
        boat::replace_boat,
        boat::delete_boat,
        boat::replace_all_boats,
        boat::delete_all_boats,
        boat::assign_load,
        boat::remove_load,
        load::create_load,
        load::get_loads,
        load::get_load,
        load::patch_load,
        load::replace_load,
        load::delete_load,
    ),
    components(schemas(
        ErrorDto,
        BoatDto,
        BoatInputDto,
        BoatLoadDto,
        PaginatedBoatsDto,
        CarrierDto,
        LoadDto,
        LoadInputDto,
        PaginatedLoadsDto,
        LoginDto,
        UserDto,
    )),
    tags(
        (name = auth::AUTH_TAG, description = "Google login"),
        (name = user::USER_TAG, description = "Registered users"),
        (name = boat::BOAT_TAG, description = "Boats owned by the caller"),
        (name = load::LOAD_TAG, description = "Loads and their carriers")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/oauth_redirect", get(oauth_redirect))
        .route("/oauth", get(oauth_callback))
        .route("/users", get(get_users))
        .route(
            "/boats",
            get(get_boats)
                .post(create_boat)
                .put(replace_all_boats)
                .delete(delete_all_boats),
        )
        .route(
            "/boats/{boat_id}",
            get(get_boat)
                .patch(patch_boat)
                .put(replace_boat)
                .delete(delete_boat),
        )
        .route(
            "/boats/{boat_id}/loads/{load_id}",
            put(assign_load).delete(remove_load),
        )
        .route("/loads", get(get_loads).post(create_load))
        .route(
            "/loads/{load_id}",
            get(get_load)
                .patch(patch_load)
                .put(replace_load)
                .delete(delete_load),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
