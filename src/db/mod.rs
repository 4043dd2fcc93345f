//! Storage abstraction for the project collection.
//!
//! Handlers only ever see the traits defined here, so the backing store
//! can be swapped without touching the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities and list query types
//! - `repository`: Trait definitions for data access
//! - `memory`: Process-memory backend seeded at startup

mod error;
pub mod memory;
mod models;
mod repository;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use memory::{InMemoryDatabase, SEED_PROJECT_COUNT};
pub use models::*;
pub use repository::*;
