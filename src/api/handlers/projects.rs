//! Project collection handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::api::{ApiError, AppState, ErrorResponse};
use crate::db::{
    DEFAULT_PAGE_SIZE, Database, Id, NewProject, PageRequest, Project, ProjectChanges,
    ProjectQuery, SortField, SortOrder,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Project response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    /// Unique identifier
    #[schema(example = 31)]
    pub id: Id,
    /// Project title
    #[schema(example = "Project 31")]
    pub title: String,
    /// Project owner
    #[schema(example = "Owner 31")]
    pub owner: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            owner: p.owner,
        }
    }
}

/// Create project request DTO
///
/// Neither field is required; an absent field is stored as an empty string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    /// Project title
    #[schema(example = "My Project")]
    #[serde(default)]
    pub title: String,
    /// Project owner
    #[schema(example = "Jane")]
    #[serde(default)]
    pub owner: String,
}

/// Replace project request DTO
///
/// Both fields are required; any `id` in the body is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    /// Project title
    #[schema(example = "Updated Project")]
    pub title: Option<String>,
    /// Project owner
    #[schema(example = "Updated Owner")]
    pub owner: Option<String>,
}

impl From<UpdateProjectRequest> for ProjectChanges {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            title: req.title,
            owner: req.owner,
        }
    }
}

/// Partial update DTO. Only the fields present are changed.
///
/// A project only has `title` and `owner` to merge, so `id` and any other
/// body field are ignored on purpose.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchProjectRequest {
    #[schema(example = "Patched Project")]
    pub title: Option<String>,
    #[schema(example = "Patched Owner")]
    pub owner: Option<String>,
}

impl From<PatchProjectRequest> for ProjectChanges {
    fn from(req: PatchProjectRequest) -> Self {
        Self {
            title: req.title,
            owner: req.owner,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListProjectsQuery {
    /// Keep projects whose title contains this text (case-sensitive)
    #[param(example = "Project 1")]
    pub title: Option<String>,
    /// Keep projects whose owner contains this text (case-sensitive)
    #[param(example = "Owner")]
    pub owner: Option<String>,
    /// Field to sort by (id, title, owner). Other values leave the order as is
    #[param(example = "title")]
    pub order: Option<String>,
    /// Sort direction (asc, desc). Only checked and applied together with `order`
    #[param(example = "desc")]
    pub direction: Option<String>,
    /// One-based page number. 0 disables paging
    #[param(example = 1)]
    pub page: Option<String>,
    /// Items per page, defaults to 10
    #[param(example = 10)]
    pub pagesize: Option<String>,
}

impl ListProjectsQuery {
    /// Validate the raw query string values into a repository query.
    fn into_query(self) -> Result<ProjectQuery, ApiError> {
        // Direction is only looked at when an order is requested, and an
        // order outside the known fields sorts nothing.
        let (sort_by, sort_order) = match non_empty(self.order) {
            None => (None, None),
            Some(order) => {
                let direction = non_empty(self.direction)
                    .map(|d| d.parse::<SortOrder>())
                    .transpose()
                    .map_err(ApiError::Validation)?
                    .unwrap_or_default();
                (order.parse::<SortField>().ok(), Some(direction))
            }
        };

        let page = match non_empty(self.page) {
            None => None,
            Some(raw) => {
                let page = raw
                    .parse::<i64>()
                    .map_err(|_| ApiError::Validation("Page must be a number".to_string()))?;
                if page == 0 {
                    // Page 0 means no paging at all
                    None
                } else {
                    let page_size = match non_empty(self.pagesize) {
                        None => DEFAULT_PAGE_SIZE,
                        Some(raw) => raw.parse::<usize>().ok().filter(|&s| s > 0).ok_or_else(
                            || {
                                ApiError::Validation(
                                    "Page size must be a positive number".to_string(),
                                )
                            },
                        )?,
                    };
                    // Pages before the first select nothing
                    let page = usize::try_from(page).unwrap_or(0);
                    Some(PageRequest::new(page, page_size))
                }
            }
        };

        Ok(ProjectQuery {
            title: non_empty(self.title),
            owner: non_empty(self.owner),
            sort_by,
            sort_order,
            page,
        })
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List projects
///
/// Filters by title and owner, then sorts, then pages
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_projects<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let db_query = query.into_query()?;
    if let Some(page) = &db_query.page {
        debug!(
            page = page.page,
            page_size = page.page_size,
            start = page.start(),
            "paging projects"
        );
    }

    let projects = state.db().projects().list(&db_query)?;

    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// Get a project by ID
///
/// Returns a single project by its ID
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = u64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_project<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_id(&id)?;
    debug!("Searching id {} in projects", id);

    let project = state.db().projects().get(id)?;

    Ok(Json(ProjectResponse::from(project)))
}

/// Create a new project
///
/// Creates a new project and returns it
#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_project<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let Json(req) = payload?;

    let project = state.db().projects().create(NewProject {
        title: req.title,
        owner: req.owner,
    })?;
    info!("Project id {} created", project.id);

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

/// Replace a project
///
/// Replaces title and owner of an existing project; the ID comes from the path
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = u64, Path, description = "Project ID")
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project replaced", body = ProjectResponse),
        (status = 400, description = "Title or owner missing, or malformed body", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_project<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(req) = payload?;
    debug!("Searching id {} in projects", id);

    // Existence is checked before the body is validated
    let project = state.db().projects().replace(id, req.into())?;
    info!("Project id {} replaced", id);

    Ok(Json(ProjectResponse::from(project)))
}

/// Partially update a project
///
/// Changes only the fields present in the body; `id` is never changed
#[utoipa::path(
    patch,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = u64, Path, description = "Project ID")
    ),
    request_body = PatchProjectRequest,
    responses(
        (status = 200, description = "Project partially updated", body = ProjectResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn patch_project<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<PatchProjectRequest>, JsonRejection>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(req) = payload?;
    debug!("Searching id {} in projects", id);

    let project = state.db().projects().patch(id, req.into())?;
    info!("Project id {} patched", id);

    Ok(Json(ProjectResponse::from(project)))
}

/// Delete a project
///
/// Deletes a project by its ID
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = u64, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_project<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    debug!("Searching id {} in projects", id);

    state.db().projects().delete(id)?;
    info!("Project id {} removed", id);

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse a path id. Anything that is not an id cannot name a project.
fn parse_id(raw: &str) -> Result<Id, ApiError> {
    raw.parse::<Id>().map_err(|_| ApiError::project_not_found())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
