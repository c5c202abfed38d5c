use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    nullable::deserialize_nullable, project::ProjectSummaryDto, work_item::WorkItemDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub fullname: String,
    /// Login name, sent on the wire as `user`.
    #[serde(rename = "user", alias = "username")]
    pub username: String,
    #[schema(value_type = String, example = "user")]
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Tasks assigned to the user, present when `include=tasks` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<WorkItemDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectSummaryDto>>,
}

/// User as embedded in another resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub fullname: String,
    #[serde(rename = "user", alias = "username")]
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Text fields of a user creation request, sent as JSON or as multipart form fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub fullname: Option<String>,
    #[serde(rename = "user", alias = "username")]
    pub username: Option<String>,
    pub password: Option<String>,
    #[schema(value_type = Option<String>, example = "user")]
    pub role: Option<UserRole>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub fullname: Option<String>,
    #[serde(rename = "user", alias = "username")]
    pub username: Option<String>,
    pub password: Option<String>,
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    /// `null` removes the current avatar.
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub avatar_url: Option<Option<String>>,
}
