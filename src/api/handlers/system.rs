//! System health and status handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

/// Root route response
#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Root route is empty.")]
    pub message: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Placeholder message", body = RootResponse)
    )
)]
#[instrument]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Root route is empty.".to_string(),
    })
}

/// Health check endpoint
///
/// Returns the current health status of the API
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
