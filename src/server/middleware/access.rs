use sea_orm::DatabaseConnection;

use crate::server::{
    error::{access::AccessError, AppError},
    model::project::Project,
    service::rules::require_project,
};

/// Guards project-scoped reads that name a user through `?userId=`.
pub struct ProjectAccessGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectAccessGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires `user_id`, when given, to be a member of the project.
    ///
    /// # Arguments
    /// - `project_id` - Project being read
    /// - `user_id` - User named by the request, if any
    ///
    /// # Returns
    /// - `Ok(Project)` - The project exists and the user, if any, is a member
    /// - `Err(AppError::NotFound)` - The project does not exist
    /// - `Err(AppError::AccessErr)` - The user is not a member of the project
    pub async fn require_member(
        &self,
        project_id: i32,
        user_id: Option<i32>,
    ) -> Result<Project, AppError> {
        let project = require_project(self.db, project_id).await?;

        if let Some(user_id) = user_id {
            if !project.has_member(user_id) {
                return Err(AccessError::NotProjectMember {
                    project_id,
                    user_id,
                }
                .into());
            }
        }

        Ok(project)
    }
}
