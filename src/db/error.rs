//! Database error types.
//!
//! Uses miette for diagnostic output and thiserror for the derives. The
//! variants are backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(projects::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(projects::db::validation_error))]
    Validation { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(projects::db::database_error))]
    Database { message: String },
}

impl DbError {
    pub(crate) fn project_not_found(id: u64) -> Self {
        DbError::NotFound {
            entity_type: "Project".to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
