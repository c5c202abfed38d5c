use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        dashboard::DashboardStatsDto,
    },
    server::{
        error::AppError, middleware::payload::QueryParams, service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub user_id: Option<i32>,
}

/// Get dashboard counters.
///
/// Without `userId` the counters cover every project, task and user. With `userId`
/// they cover the user's projects, the tasks of those projects and the users sharing
/// a project with them.
///
/// # Returns
/// - `200 OK` - The counters
/// - `404 Not Found` - `userId` does not name a user
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    params(
        ("userId" = Option<i32>, Query, description = "Scope the counters to this user's projects")
    ),
    responses(
        (status = 200, description = "Successfully computed counters", body = ApiResponse<DashboardStatsDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stats = DashboardService::new(&state.db).stats(query.user_id).await?;

    Ok(Json(ApiResponse::ok(stats.into_dto())))
}
