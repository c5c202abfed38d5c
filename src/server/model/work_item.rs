//! Work item domain models and parameters.
//!
//! Tasks and issues have the same shape but are separate resources with their own tables
//! and lifecycles. `WorkItem<K>` carries the shared fields and is tagged with a zero-sized
//! kind marker, so `Task` and `Issue` stay distinct types while validation, conversion and
//! service logic are written once.

use std::marker::PhantomData;

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{WorkPriority, WorkStatus};

use crate::{
    model::work_item::{CreateWorkItemDto, NewWorkItemDto, UpdateWorkItemDto, WorkItemDto},
    server::{
        error::AppError,
        model::{project::Project, user::User},
        util::{
            date::normalize_date,
            validate::{ensure_not_empty, non_blank, RequiredFields},
        },
    },
};

/// Marker trait distinguishing the kinds of work item.
pub trait WorkItemKind: Send + Sync + 'static {
    /// Name used in messages, e.g. `Task 7 not found`.
    const LABEL: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueKind;

impl WorkItemKind for TaskKind {
    const LABEL: &'static str = "Task";
}

impl WorkItemKind for IssueKind {
    const LABEL: &'static str = "Issue";
}

/// A unit of assignable work scoped to one project.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem<K> {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub due_date: NaiveDate,
    pub status: WorkStatus,
    pub priority: WorkPriority,
    /// Owning project. Never null.
    pub project_id: i32,
    /// Assignee, always a member of the owning project when set.
    pub assigned_to_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub(crate) kind: PhantomData<K>,
}

pub type Task = WorkItem<TaskKind>;
pub type Issue = WorkItem<IssueKind>;

impl<K> WorkItem<K> {
    pub fn into_dto(self) -> WorkItemDto {
        WorkItemDto {
            id: self.id,
            title: self.title,
            description: self.description,
            notes: self.notes,
            due_date: self.due_date,
            status: self.status,
            priority: self.priority,
            project_id: self.project_id,
            assigned_to_id: self.assigned_to_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            project: None,
            assigned_to: None,
        }
    }
}

impl Task {
    /// Converts a task entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            notes: entity.notes,
            due_date: entity.due_date,
            status: entity.status,
            priority: entity.priority,
            project_id: entity.project_id,
            assigned_to_id: entity.assigned_to_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            kind: PhantomData,
        }
    }
}

impl Issue {
    /// Converts an issue entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::issue::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            notes: entity.notes,
            due_date: entity.due_date,
            status: entity.status,
            priority: entity.priority,
            project_id: entity.project_id,
            assigned_to_id: entity.assigned_to_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            kind: PhantomData,
        }
    }
}

/// Work item together with the relations requested through `include`.
#[derive(Debug, Clone)]
pub struct WorkItemWithRelations<K> {
    pub item: WorkItem<K>,
    /// `Some` when `project` was requested.
    pub project: Option<Project>,
    /// `Some` when `assignedTo` was requested; the inner `None` marks an unassigned item.
    pub assigned_to: Option<Option<User>>,
}

impl<K> WorkItemWithRelations<K> {
    pub fn into_dto(self) -> WorkItemDto {
        WorkItemDto {
            project: self.project.map(Project::into_summary_dto),
            assigned_to: self
                .assigned_to
                .map(|user| user.map(User::into_summary_dto)),
            ..self.item.into_dto()
        }
    }
}

/// Validated fields of a work item that is about to be created.
///
/// The owning project is supplied separately: from the payload, from the route or from
/// the project being created.
#[derive(Debug, Clone)]
pub struct NewWorkItem {
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub due_date: NaiveDate,
    pub status: WorkStatus,
    pub priority: WorkPriority,
    pub assigned_to_id: Option<i32>,
}

impl NewWorkItem {
    /// Validates a work item payload.
    ///
    /// # Returns
    /// - `Ok(NewWorkItem)` - `title` and `dueDate` present, status defaulting to `new` and
    ///   priority to `medium`
    /// - `Err(AppError::Validation)` - Missing required fields or an invalid `dueDate`
    pub fn from_dto(dto: NewWorkItemDto) -> Result<Self, AppError> {
        Self::from_dto_checked(dto, RequiredFields::default())
    }

    /// Validates `dto`, reporting its missing fields together with any already recorded
    /// in `required`.
    fn from_dto_checked(dto: NewWorkItemDto, mut required: RequiredFields) -> Result<Self, AppError> {
        let title = required.take_text("title", dto.title);
        let due_date = required.take_text("dueDate", dto.due_date);
        required.check()?;

        let (Some(title), Some(due_date)) = (title, due_date) else {
            return Err(required.error());
        };

        Ok(Self {
            title,
            description: dto.description,
            notes: dto.notes,
            due_date: normalize_date("dueDate", &due_date)?,
            status: dto.status.unwrap_or(WorkStatus::New),
            priority: dto.priority.unwrap_or(WorkPriority::Medium),
            assigned_to_id: dto.assigned_to_id,
        })
    }
}

/// Parameters for creating a work item through `POST /api/tasks` or `/api/issues`.
#[derive(Debug, Clone)]
pub struct CreateWorkItemParams {
    pub project_id: i32,
    pub item: NewWorkItem,
}

impl CreateWorkItemParams {
    pub fn new(project_id: i32, item: NewWorkItem) -> Self {
        Self { project_id, item }
    }

    /// Validates a payload that names its project in `projectId`.
    ///
    /// All missing fields, `projectId` included, are reported in one error.
    pub fn from_dto(dto: CreateWorkItemDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::default();
        let project_id = required.take("projectId", dto.project_id);
        let item = NewWorkItem::from_dto_checked(dto.item, required)?;

        match project_id {
            Some(project_id) => Ok(Self::new(project_id, item)),
            None => Err(AppError::Validation(
                "Missing required field(s): projectId".to_string(),
            )),
        }
    }
}

/// Parameters for a partial work item update. The owning project cannot change.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkItemParams {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<WorkStatus>,
    pub priority: Option<WorkPriority>,
    /// `Some(None)` unassigns the item.
    pub assigned_to_id: Option<Option<i32>>,
}

impl UpdateWorkItemParams {
    /// Converts the request payload into update parameters.
    ///
    /// # Returns
    /// - `Ok(UpdateWorkItemParams)` - At least one recognized field provided
    /// - `Err(AppError::Validation)` - Nothing to update, a blank title or an invalid date
    pub fn from_dto(dto: UpdateWorkItemDto) -> Result<Self, AppError> {
        let params = Self {
            title: non_blank("title", dto.title)?,
            description: dto.description,
            notes: dto.notes,
            due_date: dto
                .due_date
                .map(|raw| normalize_date("dueDate", &raw))
                .transpose()?,
            status: dto.status,
            priority: dto.priority,
            assigned_to_id: dto.assigned_to_id,
        };

        ensure_not_empty(params.is_empty())?;

        Ok(params)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.notes.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assigned_to_id.is_none()
    }
}

/// Query filters accepted by the work item list endpoints.
#[derive(Debug, Clone, Default)]
pub struct WorkItemQuery {
    /// Only items in projects this user is a member of.
    pub member_id: Option<i32>,
    pub project_id: Option<i32>,
    pub assigned_to_id: Option<i32>,
}

/// Filter handed to the repository once member scoping has been resolved to project ids.
#[derive(Debug, Clone, Default)]
pub struct WorkItemFilter {
    pub project_ids: Option<Vec<i32>>,
    pub assigned_to_ids: Option<Vec<i32>>,
}
