use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        dashboard::{self, get_dashboard_stats},
        issue::{self, create_issue, delete_issue, get_issue, list_issues, update_issue},
        project::{
            self, create_project, create_project_issue, create_project_task, delete_project,
            get_project, list_projects, update_project,
        },
        task::{self, create_task, delete_task, get_task, list_tasks, update_task},
        user::{self, create_user, delete_user, get_user, list_users, update_user},
    },
    data::avatar::MAX_UPLOAD_BYTES,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Workboard API", description = "Projects, tasks, issues and their members"),
    paths(
        project::list_projects,
        project::get_project,
        project::create_project,
        project::update_project,
        project::delete_project,
        project::create_project_task,
        project::create_project_issue,
        task::list_tasks,
        task::get_task,
        task::create_task,
        task::update_task,
        task::delete_task,
        issue::list_issues,
        issue::get_issue,
        issue::create_issue,
        issue::update_issue,
        issue::delete_issue,
        user::list_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        dashboard::get_dashboard_stats,
    ),
    tags(
        (name = project::PROJECT_TAG, description = "Projects and their members"),
        (name = task::TASK_TAG, description = "Tasks"),
        (name = issue::ISSUE_TAG, description = "Issues"),
        (name = user::USER_TAG, description = "Users and avatars"),
        (name = dashboard::DASHBOARD_TAG, description = "Dashboard counters"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the API router.
///
/// Uploaded files under `upload_dir` are served at `/uploads`, so stored avatars are
/// reachable at the URLs saved on the user. User routes accept bodies up to
/// [`MAX_UPLOAD_BYTES`] so avatars fit; every other route keeps axum's default limit.
pub fn router(upload_dir: &Path) -> Router<AppState> {
    let users = Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/api/projects/{id}/tasks", post(create_project_task))
        .route("/api/projects/{id}/issues", post(create_project_issue))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/issues", get(list_issues).post(create_issue))
        .route(
            "/api/issues/{id}",
            get(get_issue).put(update_issue).delete(delete_issue),
        )
        .merge(users)
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .route("/api/openapi.json", get(openapi))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
