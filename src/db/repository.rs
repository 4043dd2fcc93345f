//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use crate::db::{
    DbResult,
    models::{Id, NewProject, Project, ProjectChanges, ProjectQuery},
};

#[cfg(test)]
use mockall::automock;

/// Repository for Project operations.
#[cfg_attr(test, automock)]
pub trait ProjectRepository: Send + Sync {
    /// List projects matching the query, filtered, sorted and paged.
    ///
    /// A sort without title or owner filters is kept as the new
    /// collection order.
    fn list(&self, query: &ProjectQuery) -> DbResult<Vec<Project>>;

    /// Get a project by ID.
    fn get(&self, id: Id) -> DbResult<Project>;

    /// Create a new project, assigning it the next free ID.
    fn create(&self, project: NewProject) -> DbResult<Project>;

    /// Replace title and owner of an existing project, keeping its id and
    /// position.
    ///
    /// Fails with `NotFound` before checking that both fields are present
    /// and non-empty (`Validation`). Lookup and write happen atomically.
    fn replace(&self, id: Id, changes: ProjectChanges) -> DbResult<Project>;

    /// Merge the present fields into an existing project atomically.
    fn patch(&self, id: Id, changes: ProjectChanges) -> DbResult<Project>;

    /// Delete a project by ID.
    fn delete(&self, id: Id) -> DbResult<()>;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    /// Get the project repository.
    fn projects(&self) -> &dyn ProjectRepository;
}
