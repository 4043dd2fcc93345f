//! In-memory database construction and seeding.

use super::project::MemoryProjectRepository;
use crate::db::{Database, Project, ProjectRepository};

/// Number of synthetic projects the server starts with.
pub const SEED_PROJECT_COUNT: usize = 30;

/// Build `count` synthetic projects with ids `1..=count`.
pub fn seed_projects(count: usize) -> Vec<Project> {
    (1..=count as u64)
        .map(|i| Project {
            id: i,
            title: format!("Project {}", i),
            owner: format!("Owner {}", i),
        })
        .collect()
}

/// Process-memory database.
#[derive(Default)]
pub struct InMemoryDatabase {
    projects: MemoryProjectRepository,
}

impl InMemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database holding `count` seeded projects.
    pub fn seeded(count: usize) -> Self {
        Self::with_projects(seed_projects(count))
    }

    /// Create a database from an explicit collection, kept in the given order.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: MemoryProjectRepository::from_projects(projects),
        }
    }
}

impl Database for InMemoryDatabase {
    fn projects(&self) -> &dyn ProjectRepository {
        &self.projects
    }
}
