use crate::model::dashboard::DashboardStatsDto;

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_projects: u64,
    /// Tasks in `new`, `in_progress` or `in_review`.
    pub pending_tasks: u64,
    /// Tasks in `completed` or `closed`.
    pub completed_tasks: u64,
    pub team_members: u64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            active_projects: self.active_projects,
            pending_tasks: self.pending_tasks,
            completed_tasks: self.completed_tasks,
            team_members: self.team_members,
        }
    }
}
