use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub active_projects: u64,
    pub pending_tasks: u64,
    pub completed_tasks: u64,
    pub team_members: u64,
}
