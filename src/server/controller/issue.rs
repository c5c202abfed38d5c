use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        work_item::{CreateWorkItemDto, UpdateWorkItemDto, WorkItemDto},
    },
    server::{
        controller::work_item::{self, IncludeQuery, WorkItemListQuery},
        data::issue::IssueRepository,
        error::AppError,
        middleware::payload::{JsonBody, PathParam, QueryParams},
        state::AppState,
    },
};

/// Tag for grouping issue endpoints in OpenAPI documentation
pub static ISSUE_TAG: &str = "issue";

/// List issues.
///
/// Accepts the same filters as the task list.
///
/// # Returns
/// - `200 OK` - Matching issues ordered by id
/// - `400 Bad Request` - Unknown `include` name or malformed filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/issues",
    tag = ISSUE_TAG,
    params(
        ("userId" = Option<i32>, Query, description = "Only issues in this user's projects"),
        ("projectId" = Option<i32>, Query, description = "Only issues of this project"),
        ("assignedToId" = Option<i32>, Query, description = "Only issues assigned to this user"),
        ("include" = Option<String>, Query, description = "Comma separated: project, assignedTo")
    ),
    responses(
        (status = 200, description = "Successfully retrieved issues", body = ApiResponse<Vec<WorkItemDto>>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_issues(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<WorkItemListQuery>,
) -> Result<impl IntoResponse, AppError> {
    work_item::list::<IssueRepository>(&state.db, query).await
}

/// Get an issue by id.
///
/// # Returns
/// - `200 OK` - The issue
/// - `404 Not Found` - No issue with that id
#[utoipa::path(
    get,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(
        ("id" = i32, Path, description = "Issue id"),
        ("include" = Option<String>, Query, description = "Comma separated: project, assignedTo")
    ),
    responses(
        (status = 200, description = "Successfully retrieved issue", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 404, description = "Issue not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_issue(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<IncludeQuery>,
) -> Result<impl IntoResponse, AppError> {
    work_item::get::<IssueRepository>(&state.db, id, query).await
}

/// Create an issue.
///
/// # Returns
/// - `201 Created` - The created issue
/// - `400 Bad Request` - Missing fields, invalid date or assignee outside the project
/// - `404 Not Found` - The project does not exist
#[utoipa::path(
    post,
    path = "/api/issues",
    tag = ISSUE_TAG,
    request_body = CreateWorkItemDto,
    responses(
        (status = 201, description = "Successfully created issue", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid issue data", body = MessageDto),
        (status = 404, description = "Project not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_issue(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateWorkItemDto>,
) -> Result<impl IntoResponse, AppError> {
    work_item::create_from_dto::<IssueRepository>(&state.db, payload).await
}

/// Update an issue.
///
/// Only provided fields change; `null` clears `description`, `notes` and
/// `assignedToId`.
///
/// # Returns
/// - `200 OK` - The updated issue
/// - `400 Bad Request` - No fields, invalid values or assignee outside the project
/// - `404 Not Found` - No issue with that id
#[utoipa::path(
    put,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(
        ("id" = i32, Path, description = "Issue id")
    ),
    request_body = UpdateWorkItemDto,
    responses(
        (status = 200, description = "Successfully updated issue", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid issue data", body = MessageDto),
        (status = 404, description = "Issue not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_issue(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateWorkItemDto>,
) -> Result<impl IntoResponse, AppError> {
    work_item::update::<IssueRepository>(&state.db, id, payload).await
}

/// Delete an issue.
///
/// # Returns
/// - `200 OK` - Issue deleted
/// - `404 Not Found` - No issue with that id
#[utoipa::path(
    delete,
    path = "/api/issues/{id}",
    tag = ISSUE_TAG,
    params(
        ("id" = i32, Path, description = "Issue id")
    ),
    responses(
        (status = 200, description = "Successfully deleted issue", body = MessageDto),
        (status = 404, description = "Issue not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    work_item::delete::<IssueRepository>(&state.db, id).await
}
