//! Store-backed validation rules shared by the services.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::AppError,
    model::{project::Project, user::User},
};

/// Loads a project or fails with `NotFound`.
pub async fn require_project(db: &DatabaseConnection, id: i32) -> Result<Project, AppError> {
    ProjectRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))
}

/// Loads a user or fails with `NotFound`.
pub async fn require_user(db: &DatabaseConnection, id: i32) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))
}

/// Fails with a validation error listing every id in `ids` that has no user row.
pub async fn ensure_users_exist(db: &DatabaseConnection, ids: &[i32]) -> Result<(), AppError> {
    let found: Vec<i32> = UserRepository::new(db)
        .find_by_ids(ids)
        .await?
        .into_iter()
        .map(|user| user.id)
        .collect();

    let missing: Vec<String> = ids
        .iter()
        .filter(|id| !found.contains(id))
        .map(|id| id.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Users not found: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

/// Fails unless `user_id` is a member of `project`.
pub fn ensure_assignee_is_member(project: &Project, user_id: i32) -> Result<(), AppError> {
    if !project.has_member(user_id) {
        tracing::debug!(
            "Rejected assignment of user {} to project {} with members {:?}",
            user_id,
            project.id,
            project.member_ids
        );
        return Err(AppError::Validation(format!(
            "User {} is not assigned to project {}",
            user_id, project.id
        )));
    }

    Ok(())
}

/// Fails with `Conflict` when another user already holds `username`.
///
/// # Arguments
/// - `username` - Login name to check
/// - `except` - Id of the user being updated, who may keep their own name
pub async fn ensure_username_available(
    db: &DatabaseConnection,
    username: &str,
    except: Option<i32>,
) -> Result<(), AppError> {
    match UserRepository::new(db).find_by_username(username).await? {
        Some(existing) if Some(existing.id) != except => {
            Err(AppError::Conflict("User already exists".to_string()))
        }
        _ => Ok(()),
    }
}
