//! API route configuration.

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, patch, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateProjectRequest, HealthResponse, PatchProjectRequest, ProjectResponse,
    RootResponse, UpdateProjectRequest,
};
use super::logger::log_request;
use super::{AppState, ErrorResponse};
use crate::db::Database;

/// Build routes with generic database type.
///
/// Registers handlers that are generic over the Database trait, applying
/// the turbofish automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Projects API",
        version = "0.1.0",
        description = "In-memory project collection with filtering, sorting and pagination",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_projects,
        handlers::get_project,
        handlers::create_project,
        handlers::update_project,
        handlers::patch_project,
        handlers::delete_project,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ProjectResponse,
            CreateProjectRequest,
            UpdateProjectRequest,
            PatchProjectRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "projects", description = "Project collection endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation and request logging
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Project routes (generic over Database)
    let project_routes = routes!(D => {
        get "/projects" => handlers::list_projects,
        get "/projects/{id}" => handlers::get_project,
        post "/projects" => handlers::create_project,
        put "/projects/{id}" => handlers::update_project,
        patch "/projects/{id}" => handlers::patch_project,
        delete "/projects/{id}" => handlers::delete_project,
    });

    system_routes
        .merge(project_routes)
        .merge(Scalar::with_url("/docs", api))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
