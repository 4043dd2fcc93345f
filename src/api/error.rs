//! API error type and its HTTP rendering.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Project not found")]
    pub message: String,
}

/// Errors surfaced by the HTTP layer.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("{0}")]
    #[diagnostic(code(projects::api::validation))]
    Validation(String),

    #[error("{0} not found")]
    #[diagnostic(code(projects::api::not_found))]
    NotFound(String),

    #[error("Internal error: {0}")]
    #[diagnostic(code(projects::api::internal))]
    Internal(String),

    #[error("Server error: {0}")]
    #[diagnostic(
        code(projects::api::server),
        help("Is the port already in use? Set PORT or pass --port to pick another one.")
    )]
    Server(#[from] std::io::Error),
}

impl ApiError {
    /// Not-found error for a project id.
    pub fn project_not_found() -> Self {
        ApiError::NotFound("Project".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { entity_type, .. } => ApiError::NotFound(entity_type),
            DbError::Validation { message } => ApiError::Validation(message),
            e @ DbError::Database { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
