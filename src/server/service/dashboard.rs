use std::collections::HashSet;

use entity::sea_orm_active_enums::WorkStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        project::ProjectRepository, task::TaskRepository, user::UserRepository,
        work_item::WorkItemRepository,
    },
    error::AppError,
    model::dashboard::DashboardStats,
    service::rules::require_user,
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the dashboard counters.
    ///
    /// Without a user every project, task and user is counted. With a user the counts
    /// cover the user's projects and their tasks, and `team_members` is the number of
    /// distinct users sharing a project with them, the user included.
    ///
    /// # Returns
    /// - `Ok(DashboardStats)` - The four counters
    /// - `Err(AppError::NotFound)` - `user_id` does not name an existing user
    pub async fn stats(&self, user_id: Option<i32>) -> Result<DashboardStats, AppError> {
        let project_repo = ProjectRepository::new(self.db);
        let task_repo = TaskRepository::new(self.db);

        let Some(user_id) = user_id else {
            return Ok(DashboardStats {
                active_projects: project_repo.count().await?,
                pending_tasks: task_repo.count_by_status(None, &WorkStatus::PENDING).await?,
                completed_tasks: task_repo
                    .count_by_status(None, &WorkStatus::FINISHED)
                    .await?,
                team_members: UserRepository::new(self.db).count().await?,
            });
        };

        require_user(self.db, user_id).await?;

        let project_ids = project_repo.project_ids_for_member(user_id).await?;

        let mut team: HashSet<i32> = project_repo
            .member_ids(&project_ids)
            .await?
            .into_values()
            .flatten()
            .collect();
        team.insert(user_id);

        Ok(DashboardStats {
            active_projects: project_ids.len() as u64,
            pending_tasks: task_repo
                .count_by_status(Some(project_ids.as_slice()), &WorkStatus::PENDING)
                .await?,
            completed_tasks: task_repo
                .count_by_status(Some(project_ids.as_slice()), &WorkStatus::FINISHED)
                .await?,
            team_members: team.len() as u64,
        })
    }
}
