use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        work_item::{CreateWorkItemDto, UpdateWorkItemDto, WorkItemDto},
    },
    server::{
        controller::work_item::{self, IncludeQuery, WorkItemListQuery},
        data::task::TaskRepository,
        error::AppError,
        middleware::payload::{JsonBody, PathParam, QueryParams},
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// List tasks.
///
/// Filters combine with AND. `userId` limits the list to tasks of projects the user
/// is a member of.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `userId`, `projectId`, `assignedToId` filters and `include`
///
/// # Returns
/// - `200 OK` - Matching tasks ordered by id
/// - `400 Bad Request` - Unknown `include` name or malformed filter
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    params(
        ("userId" = Option<i32>, Query, description = "Only tasks in this user's projects"),
        ("projectId" = Option<i32>, Query, description = "Only tasks of this project"),
        ("assignedToId" = Option<i32>, Query, description = "Only tasks assigned to this user"),
        ("include" = Option<String>, Query, description = "Comma separated: project, assignedTo")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = ApiResponse<Vec<WorkItemDto>>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<WorkItemListQuery>,
) -> Result<impl IntoResponse, AppError> {
    work_item::list::<TaskRepository>(&state.db, query).await
}

/// Get a task by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Task id
/// - `query` - Optional `include` relations
///
/// # Returns
/// - `200 OK` - The task
/// - `404 Not Found` - No task with that id
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task id"),
        ("include" = Option<String>, Query, description = "Comma separated: project, assignedTo")
    ),
    responses(
        (status = 200, description = "Successfully retrieved task", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 404, description = "Task not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<IncludeQuery>,
) -> Result<impl IntoResponse, AppError> {
    work_item::get::<TaskRepository>(&state.db, id, query).await
}

/// Create a task.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Task fields including `projectId`
///
/// # Returns
/// - `201 Created` - The created task
/// - `400 Bad Request` - Missing fields, invalid date or assignee outside the project
/// - `404 Not Found` - The project does not exist
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateWorkItemDto,
    responses(
        (status = 201, description = "Successfully created task", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid task data", body = MessageDto),
        (status = 404, description = "Project not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateWorkItemDto>,
) -> Result<impl IntoResponse, AppError> {
    work_item::create_from_dto::<TaskRepository>(&state.db, payload).await
}

/// Update a task.
///
/// Only provided fields change; `null` clears `description`, `notes` and
/// `assignedToId`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Task id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated task
/// - `400 Bad Request` - No fields, invalid values or assignee outside the project
/// - `404 Not Found` - No task with that id
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task id")
    ),
    request_body = UpdateWorkItemDto,
    responses(
        (status = 200, description = "Successfully updated task", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid task data", body = MessageDto),
        (status = 404, description = "Task not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateWorkItemDto>,
) -> Result<impl IntoResponse, AppError> {
    work_item::update::<TaskRepository>(&state.db, id, payload).await
}

/// Delete a task.
///
/// # Returns
/// - `200 OK` - Task deleted
/// - `404 Not Found` - No task with that id
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Successfully deleted task", body = MessageDto),
        (status = 404, description = "Task not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    work_item::delete::<TaskRepository>(&state.db, id).await
}
