//! In-memory implementation of the database traits.
//!
//! Projects live in an ordered `Vec` behind a lock. Nothing is persisted;
//! the collection is rebuilt from the seed on every start.

mod database;
mod helpers;
mod project;

#[cfg(test)]
mod database_test;

pub use database::{InMemoryDatabase, SEED_PROJECT_COUNT, seed_projects};
pub use helpers::locale_cmp;
pub use project::MemoryProjectRepository;
