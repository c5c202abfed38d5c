//! Project domain models and parameters.
//!
//! A project owns tasks and issues and has a set of member users. Membership is the only
//! ownership concept: a single owner is a project with one member.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        project::{CreateProjectDto, ProjectDto, ProjectSummaryDto, UpdateProjectDto},
        work_item::NewWorkItemDto,
    },
    server::{
        error::AppError,
        model::{
            user::User,
            work_item::{Issue, NewWorkItem, Task},
        },
        util::{
            date::normalize_date,
            validate::{ensure_date_order, ensure_not_empty, non_blank, RequiredFields},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Ids of member users in ascending order.
    pub member_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Converts an entity model and its membership rows to the domain model.
    ///
    /// # Arguments
    /// - `entity` - The project entity from the database
    /// - `member_ids` - Ids of the users in the project's membership set
    pub fn from_entity(entity: entity::project::Model, mut member_ids: Vec<i32>) -> Self {
        member_ids.sort_unstable();

        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            due_date: entity.due_date,
            member_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn has_member(&self, user_id: i32) -> bool {
        self.member_ids.contains(&user_id)
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            due_date: self.due_date,
            member_ids: self.member_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tasks: None,
            issues: None,
            members: None,
        }
    }

    pub fn into_summary_dto(self) -> ProjectSummaryDto {
        ProjectSummaryDto {
            id: self.id,
            title: self.title,
            start_date: self.start_date,
            due_date: self.due_date,
        }
    }
}

/// Project together with the relations requested through `include`.
#[derive(Debug, Clone)]
pub struct ProjectWithRelations {
    pub project: Project,
    pub tasks: Option<Vec<Task>>,
    pub issues: Option<Vec<Issue>>,
    pub members: Option<Vec<User>>,
}

impl ProjectWithRelations {
    /// Wraps a project without any relations.
    pub fn bare(project: Project) -> Self {
        Self {
            project,
            tasks: None,
            issues: None,
            members: None,
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            tasks: self
                .tasks
                .map(|tasks| tasks.into_iter().map(Task::into_dto).collect()),
            issues: self
                .issues
                .map(|issues| issues.into_iter().map(Issue::into_dto).collect()),
            members: self
                .members
                .map(|users| users.into_iter().map(User::into_summary_dto).collect()),
            ..self.project.into_dto()
        }
    }
}

/// Project row and membership written on creation.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Deduplicated, never empty.
    pub member_ids: Vec<i32>,
}

/// Parameters for creating a project with optional nested tasks and issues.
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub project: NewProject,
    pub tasks: Vec<NewWorkItem>,
    pub issues: Vec<NewWorkItem>,
}

impl CreateProjectParams {
    /// Validates a project creation payload, nested work items included.
    ///
    /// `userId` and `userIds` are merged into one member list; at least one member is
    /// required. Errors in nested items are prefixed with their position, e.g.
    /// `tasks[1]: Missing required field(s): title`.
    ///
    /// # Returns
    /// - `Ok(CreateProjectParams)` - Payload is complete and its dates are ordered
    /// - `Err(AppError::Validation)` - Missing fields, invalid dates, `startDate` after
    ///   `dueDate` or an invalid nested item
    pub fn from_dto(dto: CreateProjectDto) -> Result<Self, AppError> {
        let mut member_ids = dto.user_ids.unwrap_or_default();
        member_ids.extend(dto.user_id);
        member_ids.sort_unstable();
        member_ids.dedup();

        let mut required = RequiredFields::default();
        let title = required.take_text("title", dto.title);
        let start_date = required.take_text("startDate", dto.start_date);
        let due_date = required.take_text("dueDate", dto.due_date);
        let member_ids = required.take("userIds", Some(member_ids).filter(|ids| !ids.is_empty()));

        let (Some(title), Some(start_date), Some(due_date), Some(member_ids)) =
            (title, start_date, due_date, member_ids)
        else {
            return Err(required.error());
        };

        let start_date = normalize_date("startDate", &start_date)?;
        let due_date = normalize_date("dueDate", &due_date)?;
        ensure_date_order(start_date, due_date)?;

        Ok(Self {
            project: NewProject {
                title,
                description: dto.description,
                start_date,
                due_date,
                member_ids,
            },
            tasks: nested_items("tasks", dto.tasks.unwrap_or_default())?,
            issues: nested_items("issues", dto.issues.unwrap_or_default())?,
        })
    }
}

fn nested_items(
    field: &str,
    items: Vec<NewWorkItemDto>,
) -> Result<Vec<NewWorkItem>, AppError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, dto)| {
            NewWorkItem::from_dto(dto).map_err(|err| match err {
                AppError::Validation(msg) => {
                    AppError::Validation(format!("{}[{}]: {}", field, index, msg))
                }
                other => other,
            })
        })
        .collect()
}

/// Parameters for a partial project update.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// Replacement member list, deduplicated and never empty.
    pub member_ids: Option<Vec<i32>>,
}

impl UpdateProjectParams {
    /// Converts the request payload into update parameters.
    ///
    /// Date order is checked by the service against the merged result, since only one of
    /// the two dates may be provided.
    pub fn from_dto(dto: UpdateProjectDto) -> Result<Self, AppError> {
        let member_ids = match dto.user_ids {
            Some(mut ids) => {
                ids.sort_unstable();
                ids.dedup();
                if ids.is_empty() {
                    return Err(AppError::Validation(
                        "userIds must contain at least one user".to_string(),
                    ));
                }
                Some(ids)
            }
            None => None,
        };

        let params = Self {
            title: non_blank("title", dto.title)?,
            description: dto.description,
            start_date: dto
                .start_date
                .map(|raw| normalize_date("startDate", &raw))
                .transpose()?,
            due_date: dto
                .due_date
                .map(|raw| normalize_date("dueDate", &raw))
                .transpose()?,
            member_ids,
        };

        ensure_not_empty(params.is_empty())?;

        Ok(params)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.member_ids.is_none()
    }
}

/// Filters for listing projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Only projects this user is a member of.
    pub member_id: Option<i32>,
}
