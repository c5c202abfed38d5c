//! User domain models and parameters.
//!
//! Provides the user domain model, the parameter types for creating and updating users
//! (including an optional avatar upload) and the record types handed to the repository
//! once passwords have been hashed and avatars stored.

use axum::body::Bytes;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserSummaryDto},
    server::{
        error::AppError,
        model::{project::Project, work_item::Task},
        util::validate::{ensure_not_empty, non_blank, RequiredFields},
    },
};

/// Application user. The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub fullname: String,
    /// Unique login name.
    pub username: String,
    pub role: UserRole,
    /// Public path of the uploaded avatar, e.g. `/uploads/avatars/1717171717-ab12.png`.
    pub avatar_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Drops the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            fullname: entity.fullname,
            username: entity.username,
            role: entity.role,
            avatar_url: entity.avatar_url,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            fullname: self.fullname,
            username: self.username,
            role: self.role,
            avatar_url: self.avatar_url,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tasks: None,
            projects: None,
        }
    }

    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            fullname: self.fullname,
            username: self.username,
            avatar_url: self.avatar_url,
        }
    }
}

/// User together with the relations requested through `include`.
///
/// `None` means the relation was not requested, `Some(vec![])` that it was and is empty.
#[derive(Debug, Clone)]
pub struct UserWithRelations {
    pub user: User,
    /// Tasks assigned to the user.
    pub tasks: Option<Vec<Task>>,
    /// Projects the user is a member of.
    pub projects: Option<Vec<Project>>,
}

impl UserWithRelations {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            tasks: self
                .tasks
                .map(|tasks| tasks.into_iter().map(Task::into_dto).collect()),
            projects: self
                .projects
                .map(|projects| projects.into_iter().map(Project::into_summary_dto).collect()),
            ..self.user.into_dto()
        }
    }
}

/// Image file received with a user create or update request.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    /// File name sent by the client, used only for its extension.
    pub file_name: Option<String>,
    /// MIME type sent by the client. Must be `image/*`.
    pub content_type: String,
    pub bytes: Bytes,
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub fullname: String,
    pub username: String,
    /// Plaintext password, hashed by the service before storage.
    pub password: String,
    pub role: UserRole,
    pub active: bool,
    pub avatar: Option<AvatarUpload>,
}

impl CreateUserParams {
    /// Converts the request payload into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All required fields present; role defaults to `user`,
    ///   active to `true`
    /// - `Err(AppError::Validation)` - Lists every missing field among `fullname`,
    ///   `user` and `password`
    pub fn from_dto(dto: CreateUserDto, avatar: Option<AvatarUpload>) -> Result<Self, AppError> {
        let mut required = RequiredFields::default();
        let fullname = required.take_text("fullname", dto.fullname);
        let username = required.take_text("user", dto.username);
        let password = required.take_text("password", dto.password);

        let (Some(fullname), Some(username), Some(password)) = (fullname, username, password)
        else {
            return Err(required.error());
        };

        Ok(Self {
            fullname,
            username: username.trim().to_string(),
            password,
            role: dto.role.unwrap_or(UserRole::User),
            active: dto.active.unwrap_or(true),
            avatar,
        })
    }
}

/// Parameters for a partial user update.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub fullname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    /// `Some(None)` removes the avatar.
    pub avatar_url: Option<Option<String>>,
    /// A new avatar; takes precedence over `avatar_url`.
    pub avatar: Option<AvatarUpload>,
}

impl UpdateUserParams {
    /// Converts the request payload into update parameters.
    ///
    /// # Returns
    /// - `Ok(UpdateUserParams)` - At least one field or an avatar was provided
    /// - `Err(AppError::Validation)` - Nothing to update, or a provided text field is blank
    pub fn from_dto(dto: UpdateUserDto, avatar: Option<AvatarUpload>) -> Result<Self, AppError> {
        let params = Self {
            fullname: non_blank("fullname", dto.fullname)?,
            username: non_blank("user", dto.username)?.map(|u| u.trim().to_string()),
            password: non_blank("password", dto.password)?,
            role: dto.role,
            active: dto.active,
            avatar_url: dto.avatar_url,
            avatar,
        };

        ensure_not_empty(params.is_empty())?;

        Ok(params)
    }

    pub fn is_empty(&self) -> bool {
        self.fullname.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.role.is_none()
            && self.active.is_none()
            && self.avatar_url.is_none()
            && self.avatar.is_none()
    }
}

/// Row written by the repository on user creation.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub fullname: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub active: bool,
}

/// Column changes applied by the repository on user update.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub fullname: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    pub avatar_url: Option<Option<String>>,
}

/// Filters for listing users.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub active: Option<bool>,
}
