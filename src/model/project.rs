use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    nullable::deserialize_nullable,
    user::UserSummaryDto,
    work_item::{NewWorkItemDto, WorkItemDto},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub member_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<WorkItemDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<WorkItemDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<UserSummaryDto>>,
}

/// Project as embedded in another resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryDto {
    pub id: i32,
    pub title: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    /// Single-member shorthand, merged into `userIds`.
    pub user_id: Option<i32>,
    pub user_ids: Option<Vec<i32>>,
    pub tasks: Option<Vec<NewWorkItemDto>>,
    pub issues: Option<Vec<NewWorkItemDto>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    /// Replaces the whole member list.
    pub user_ids: Option<Vec<i32>>,
}
