//! Project factory for creating test project entities and their memberships.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let project = ProjectFactory::new(&db)
///     .title("Launch")
///     .members(vec![owner.id, teammate.id])
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    start_date: NaiveDate,
    due_date: NaiveDate,
    members: Vec<i32>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Project {id}"`
    /// - description: `None`
    /// - start_date: today
    /// - due_date: 30 days from today
    /// - members: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            title: format!("Project {}", id),
            description: None,
            start_date: today,
            due_date: today + Duration::days(30),
            members: Vec::new(),
        }
    }

    /// Sets the project title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the project description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the start and due dates.
    pub fn dates(mut self, start_date: NaiveDate, due_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.due_date = due_date;
        self
    }

    /// Sets the user ids inserted as project members.
    pub fn members(mut self, members: Vec<i32>) -> Self {
        self.members = members;
        self
    }

    /// Builds and inserts the project and its membership rows.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        let now = Utc::now();
        let project = entity::project::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            due_date: ActiveValue::Set(self.due_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for user_id in self.members {
            entity::project_member::ActiveModel {
                project_id: ActiveValue::Set(project.id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(project)
    }
}

/// Creates a project with default values and the given members.
pub async fn create_project(
    db: &DatabaseConnection,
    members: &[i32],
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).members(members.to_vec()).build().await
}
