//! In-memory ProjectRepository implementation.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::helpers::{apply_page, apply_query, apply_sort, sorts_collection};
use crate::db::{
    DbError, DbResult, Id, NewProject, Project, ProjectChanges, ProjectQuery, ProjectRepository,
};

#[derive(Debug, Default)]
struct ProjectStore {
    projects: Vec<Project>,
    /// Next id to hand out. Only ever grows, so ids are never reused.
    next_id: Id,
}

impl ProjectStore {
    fn position(&self, id: Id) -> DbResult<usize> {
        self.projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DbError::project_not_found(id))
    }

    fn find_mut(&mut self, id: Id) -> DbResult<&mut Project> {
        let index = self.position(id)?;
        Ok(&mut self.projects[index])
    }
}

/// Lock-guarded project collection, in insertion order until an unfiltered
/// sort reorders it.
#[derive(Debug)]
pub struct MemoryProjectRepository {
    store: RwLock<ProjectStore>,
}

impl Default for MemoryProjectRepository {
    fn default() -> Self {
        Self::from_projects(Vec::new())
    }
}

impl MemoryProjectRepository {
    /// Build a repository over an existing collection.
    ///
    /// The id counter starts one past the highest id present.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let next_id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            store: RwLock::new(ProjectStore { projects, next_id }),
        }
    }

    fn read(&self) -> DbResult<RwLockReadGuard<'_, ProjectStore>> {
        self.store.read().map_err(|e| DbError::Database {
            message: format!("Failed to acquire project store lock: {}", e),
        })
    }

    fn write(&self) -> DbResult<RwLockWriteGuard<'_, ProjectStore>> {
        self.store.write().map_err(|e| DbError::Database {
            message: format!("Failed to acquire project store lock: {}", e),
        })
    }
}

impl ProjectRepository for MemoryProjectRepository {
    fn list(&self, query: &ProjectQuery) -> DbResult<Vec<Project>> {
        if sorts_collection(query) {
            let mut store = self.write()?;
            apply_sort(&mut store.projects, query);
            return Ok(apply_page(store.projects.clone(), query));
        }

        let store = self.read()?;
        Ok(apply_query(&store.projects, query))
    }

    fn get(&self, id: Id) -> DbResult<Project> {
        let store = self.read()?;
        let index = store.position(id)?;
        Ok(store.projects[index].clone())
    }

    fn create(&self, project: NewProject) -> DbResult<Project> {
        let mut store = self.write()?;

        let id = store.next_id;
        store.next_id += 1;

        let project = Project {
            id,
            title: project.title,
            owner: project.owner,
        };
        store.projects.push(project.clone());
        debug!(id, total = store.projects.len(), "project stored");

        Ok(project)
    }

    fn replace(&self, id: Id, changes: ProjectChanges) -> DbResult<Project> {
        let mut store = self.write()?;
        let project = store.find_mut(id)?;

        let non_empty = |v: Option<String>| v.filter(|v| !v.is_empty());
        let (Some(title), Some(owner)) = (non_empty(changes.title), non_empty(changes.owner))
        else {
            return Err(DbError::Validation {
                message: "Title and owner are required".to_string(),
            });
        };

        *project = Project { id, title, owner };
        Ok(project.clone())
    }

    fn patch(&self, id: Id, changes: ProjectChanges) -> DbResult<Project> {
        let mut store = self.write()?;
        let project = store.find_mut(id)?;
        changes.merge_into(project);
        Ok(project.clone())
    }

    fn delete(&self, id: Id) -> DbResult<()> {
        let mut store = self.write()?;
        let index = store.position(id)?;
        store.projects.remove(index);
        debug!(id, total = store.projects.len(), "project removed");
        Ok(())
    }
}
