//! Issue factory for creating test issue entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::{WorkPriority, WorkStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test issues with customizable fields.
pub struct IssueFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    title: String,
    due_date: NaiveDate,
    status: WorkStatus,
    priority: WorkPriority,
    assigned_to_id: Option<i32>,
}

impl<'a> IssueFactory<'a> {
    /// Creates a new IssueFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Issue {id}"`
    /// - due_date: 7 days from today
    /// - status: `WorkStatus::New`
    /// - priority: `WorkPriority::Medium`
    /// - assigned_to_id: `None`
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            project_id,
            title: format!("Issue {}", id),
            due_date: Utc::now().date_naive() + Duration::days(7),
            status: WorkStatus::New,
            priority: WorkPriority::Medium,
            assigned_to_id: None,
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the due date.
    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the status.
    pub fn status(mut self, status: WorkStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: WorkPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee. The factory does not check project membership.
    pub fn assigned_to(mut self, assigned_to_id: Option<i32>) -> Self {
        self.assigned_to_id = assigned_to_id;
        self
    }

    /// Builds and inserts the issue entity into the database.
    pub async fn build(self) -> Result<entity::issue::Model, DbErr> {
        let now = Utc::now();
        entity::issue::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            due_date: ActiveValue::Set(self.due_date),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            project_id: ActiveValue::Set(self.project_id),
            assigned_to_id: ActiveValue::Set(self.assigned_to_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a issue with default values in the given project.
pub async fn create_issue(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::issue::Model, DbErr> {
    IssueFactory::new(db, project_id).build().await
}
