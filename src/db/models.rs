//! Domain models for the project collection.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

// =============================================================================
// Query Types for Filtering, Sorting and Pagination
// =============================================================================

/// Page size used when a page is requested without an explicit size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err("Direction must be asc or desc".to_string()),
        }
    }
}

/// Project field a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Owner,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Id => write!(f, "id"),
            SortField::Title => write!(f, "title"),
            SortField::Owner => write!(f, "owner"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "owner" => Ok(SortField::Owner),
            _ => Err("Order must be id, title or owner".to_string()),
        }
    }
}

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1. Page 0 selects nothing.
    pub page: usize,
    /// Number of items per page.
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Index of the first item on this page.
    pub fn start(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Query for Projects.
///
/// Applied in a fixed order: title filter, owner filter, sort, page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Keep projects whose title contains this value (case-sensitive).
    pub title: Option<String>,
    /// Keep projects whose owner contains this value (case-sensitive).
    pub owner: Option<String>,
    /// Field to sort by. Without it the collection order is kept.
    pub sort_by: Option<SortField>,
    /// Sort order, only meaningful together with `sort_by`.
    pub sort_order: Option<SortOrder>,
    /// Page to cut out of the filtered and sorted result.
    pub page: Option<PageRequest>,
}

/// Project identifier, assigned by the store.
pub type Id = u64;

/// A tracked project and the person who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub title: String,
    pub owner: String,
}

/// Fields required to create a project; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub owner: String,
}

/// Field values supplied by a replace or partial update.
///
/// `None` means the field was absent from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub owner: Option<String>,
}

impl ProjectChanges {
    /// Overwrite the fields that are present. The id is never touched.
    pub fn merge_into(self, target: &mut Project) {
        if let Some(title) = self.title {
            target.title = title;
        }
        if let Some(owner) = self.owner {
            target.owner = owner;
        }
    }
}
