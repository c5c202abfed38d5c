use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        project::{CreateProjectDto, ProjectDto, UpdateProjectDto},
        work_item::{NewWorkItemDto, WorkItemDto},
    },
    server::{
        controller::work_item,
        data::{issue::IssueRepository, task::TaskRepository},
        error::AppError,
        middleware::{
            access::ProjectAccessGuard,
            payload::{JsonBody, PathParam, QueryParams},
        },
        model::{
            project::{CreateProjectParams, ProjectFilter, UpdateProjectParams},
            relation::ProjectRelations,
            work_item::{CreateWorkItemParams, NewWorkItem},
        },
        service::project::ProjectService,
        state::AppState,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuery {
    pub user_id: Option<i32>,
    pub include: Option<String>,
}

/// List projects.
///
/// With `userId`, only the projects that user is a member of are returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `userId` scope and `include` relations
///
/// # Returns
/// - `200 OK` - Projects ordered by id
/// - `400 Bad Request` - Unknown `include` name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    params(
        ("userId" = Option<i32>, Query, description = "Only projects this user is a member of"),
        ("include" = Option<String>, Query, description = "Comma separated: tasks, issues, members")
    ),
    responses(
        (status = 200, description = "Successfully retrieved projects", body = ApiResponse<Vec<ProjectDto>>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ProjectQuery>,
) -> Result<impl IntoResponse, AppError> {
    let relations = ProjectRelations::parse(query.include.as_deref())?;

    let projects = ProjectService::new(&state.db)
        .list(
            ProjectFilter {
                member_id: query.user_id,
            },
            relations,
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        projects
            .into_iter()
            .map(|project| project.into_dto())
            .collect::<Vec<_>>(),
    )))
}

/// Get a project by id.
///
/// When `userId` is given the user must be a member of the project.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Project id
/// - `query` - Optional `userId` and `include` relations
///
/// # Returns
/// - `200 OK` - The project
/// - `403 Forbidden` - `userId` is not a member of the project
/// - `404 Not Found` - No project with that id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project id"),
        ("userId" = Option<i32>, Query, description = "Requesting user; must be a member"),
        ("include" = Option<String>, Query, description = "Comma separated: tasks, issues, members")
    ),
    responses(
        (status = 200, description = "Successfully retrieved project", body = ApiResponse<ProjectDto>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 403, description = "User is not a member of the project", body = MessageDto),
        (status = 404, description = "Project not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<ProjectQuery>,
) -> Result<impl IntoResponse, AppError> {
    let relations = ProjectRelations::parse(query.include.as_deref())?;

    ProjectAccessGuard::new(&state.db)
        .require_member(id, query.user_id)
        .await?;

    let project = ProjectService::new(&state.db).get(id, relations).await?;

    Ok(Json(ApiResponse::ok(project.into_dto())))
}

/// Create a project.
///
/// Members come from `userIds` and the `userId` shorthand; at least one is required.
/// Nested `tasks` and `issues` are validated before anything is written and may only
/// be assigned to the new members.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Project fields with optional nested work items
///
/// # Returns
/// - `201 Created` - The project, with nested items when any were created
/// - `400 Bad Request` - Missing fields, invalid dates, unknown users or invalid nested item
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Successfully created project", body = ApiResponse<ProjectDto>),
        (status = 400, description = "Invalid project data", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateProjectParams::from_dto(payload)?;

    let project = ProjectService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            project.into_dto(),
            "Project created successfully",
        )),
    ))
}

/// Update a project.
///
/// `userIds` replaces the member list. Members still assigned to a task or issue of
/// the project cannot be removed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Project id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated project
/// - `400 Bad Request` - No fields, invalid dates, unknown users or removed assignees
/// - `404 Not Found` - No project with that id
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project id")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Successfully updated project", body = ApiResponse<ProjectDto>),
        (status = 400, description = "Invalid project data", body = MessageDto),
        (status = 404, description = "Project not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateProjectParams::from_dto(payload)?;

    let project = ProjectService::new(&state.db).update(id, params).await?;

    Ok(Json(ApiResponse::with_message(
        project.into_dto(),
        "Project updated successfully",
    )))
}

/// Delete a project together with its tasks, issues and memberships.
///
/// # Returns
/// - `200 OK` - Project deleted
/// - `404 Not Found` - No project with that id
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Successfully deleted project", body = MessageDto),
        (status = 404, description = "Project not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    ProjectService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::success("Project deleted successfully")))
}

/// Create a task inside a project.
///
/// # Returns
/// - `201 Created` - The created task
/// - `400 Bad Request` - Missing fields or assignee outside the project
/// - `404 Not Found` - No project with that id
#[utoipa::path(
    post,
    path = "/api/projects/{id}/tasks",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project id")
    ),
    request_body = NewWorkItemDto,
    responses(
        (status = 201, description = "Successfully created task", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid task data", body = MessageDto),
        (status = 404, description = "Project not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_project_task(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<NewWorkItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateWorkItemParams::new(id, NewWorkItem::from_dto(payload)?);

    work_item::create::<TaskRepository>(&state.db, params).await
}

/// Create an issue inside a project.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/issues",
    tag = PROJECT_TAG,
    params(
        ("id" = i32, Path, description = "Project id")
    ),
    request_body = NewWorkItemDto,
    responses(
        (status = 201, description = "Successfully created issue", body = ApiResponse<WorkItemDto>),
        (status = 400, description = "Invalid issue data", body = MessageDto),
        (status = 404, description = "Project not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_project_issue(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<NewWorkItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateWorkItemParams::new(id, NewWorkItem::from_dto(payload)?);

    work_item::create::<IssueRepository>(&state.db, params).await
}
