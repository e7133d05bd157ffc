//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::UserService;
use crate::interfaces::http::common::ErrorBody;
use crate::interfaces::http::modules::{root, users};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::welcome,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
    ),
    components(schemas(
        root::WelcomeResponse,
        users::UserDto,
        users::CreateUserRequest,
        users::UpdateUserRequest,
        ErrorBody,
    )),
    tags(
        (name = "Root", description = "Service status"),
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the REST API router with all routes and middleware.
pub fn create_api_router(user_service: Arc<UserService>) -> Router {
    let user_state = users::UserHandlerState { user_service };

    let users_router = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root::welcome))
        .nest("/users", users_router)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
