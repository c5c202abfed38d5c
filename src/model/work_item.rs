//! Wire types for tasks and issues.
//!
//! Tasks and issues share one JSON shape, so both endpoints use the same DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{WorkPriority, WorkStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{nullable::deserialize_nullable, project::ProjectSummaryDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub due_date: NaiveDate,
    #[schema(value_type = String, example = "in_progress")]
    pub status: WorkStatus,
    #[schema(value_type = String, example = "medium")]
    pub priority: WorkPriority,
    pub project_id: i32,
    pub assigned_to_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present when `include=project` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSummaryDto>,
    /// Present when `include=assignedTo` was requested, `null` for unassigned items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<UserSummaryDto>)]
    pub assigned_to: Option<Option<UserSummaryDto>>,
}

/// Work item fields accepted on creation, without the owning project.
///
/// Used for nested `tasks[]` / `issues[]` on project creation and for the
/// project-scoped `POST /api/projects/{id}/tasks` routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkItemDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// `YYYY-MM-DD`; longer ISO timestamps are cut to their date.
    pub due_date: Option<String>,
    #[schema(value_type = Option<String>, example = "new")]
    pub status: Option<WorkStatus>,
    #[schema(value_type = Option<String>, example = "medium")]
    pub priority: Option<WorkPriority>,
    pub assigned_to_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkItemDto {
    #[serde(flatten)]
    pub item: NewWorkItemDto,
    pub project_id: Option<i32>,
}

/// Partial update. Absent fields are left alone, `null` clears nullable ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkItemDto {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
    pub due_date: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<WorkStatus>,
    #[schema(value_type = Option<String>)]
    pub priority: Option<WorkPriority>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i32>)]
    pub assigned_to_id: Option<Option<i32>>,
}
