use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{
        avatar::AvatarStore, issue::IssueRepository, project::ProjectRepository,
        task::TaskRepository, user::UserRepository, work_item::WorkItemRepository,
    },
    error::AppError,
    model::{
        project::Project,
        relation::UserRelations,
        user::{
            CreateUserParams, NewUserRecord, UpdateUserParams, User, UserChanges, UserFilter,
            UserWithRelations,
        },
        work_item::{Task, WorkItemFilter},
    },
    service::rules::{ensure_username_available, require_user},
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    avatars: &'a AvatarStore,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, avatars: &'a AvatarStore) -> Self {
        Self { db, avatars }
    }

    /// Lists users matching the filter with the requested relations.
    pub async fn list(
        &self,
        filter: UserFilter,
        relations: UserRelations,
    ) -> Result<Vec<UserWithRelations>, AppError> {
        let users = UserRepository::new(self.db).find(&filter).await?;

        self.with_relations(users, relations).await
    }

    /// Gets a user by id with the requested relations.
    ///
    /// # Returns
    /// - `Ok(UserWithRelations)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32, relations: UserRelations) -> Result<UserWithRelations, AppError> {
        let user = require_user(self.db, id).await?;

        let mut users = self.with_relations(vec![user], relations).await?;
        users.pop().ok_or_else(|| AppError::not_found("User", id))
    }

    /// Creates a user, hashing the password and storing the avatar if one was uploaded.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - The login name is taken
    /// - `Err(AppError::Validation)` - The avatar is not an image
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        ensure_username_available(self.db, &params.username, None).await?;

        let password_hash = hash_password(&params.password)?;
        let avatar_url = match params.avatar {
            Some(upload) => Some(self.avatars.save(upload).await?),
            None => None,
        };

        let user = UserRepository::new(self.db)
            .create(NewUserRecord {
                fullname: params.fullname,
                username: params.username,
                password_hash,
                role: params.role,
                avatar_url,
                active: params.active,
            })
            .await
            .map_err(map_unique_violation)?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - The new login name belongs to another user
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let current = require_user(self.db, id).await?;

        let username = params
            .username
            .filter(|username| *username != current.username);
        if let Some(username) = &username {
            ensure_username_available(self.db, username, Some(id)).await?;
        }

        let password_hash = params
            .password
            .map(|password| hash_password(&password))
            .transpose()?;

        let avatar_url = match params.avatar {
            Some(upload) => Some(Some(self.avatars.save(upload).await?)),
            None => params.avatar_url,
        };

        UserRepository::new(self.db)
            .update(
                id,
                UserChanges {
                    fullname: params.fullname,
                    username,
                    password_hash,
                    role: params.role,
                    active: params.active,
                    avatar_url,
                },
            )
            .await
            .map_err(map_unique_violation)?
            .ok_or_else(|| AppError::not_found("User", id))
    }

    /// Deletes a user after clearing their assignments and memberships.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        require_user(self.db, id).await?;

        let tasks = TaskRepository::new(self.db).unassign_user(id).await?;
        let issues = IssueRepository::new(self.db).unassign_user(id).await?;
        ProjectRepository::new(self.db)
            .remove_member_everywhere(id)
            .await?;

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("User", id));
        }

        tracing::info!(
            "Deleted user {}, unassigned {} tasks and {} issues",
            id,
            tasks,
            issues
        );

        Ok(())
    }

    async fn with_relations(
        &self,
        users: Vec<User>,
        relations: UserRelations,
    ) -> Result<Vec<UserWithRelations>, AppError> {
        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();

        let mut tasks: HashMap<i32, Vec<Task>> = HashMap::new();
        if relations.tasks {
            let assigned = TaskRepository::new(self.db)
                .find(&WorkItemFilter {
                    project_ids: None,
                    assigned_to_ids: Some(user_ids.clone()),
                })
                .await?;

            for task in assigned {
                if let Some(user_id) = task.assigned_to_id {
                    tasks.entry(user_id).or_default().push(task);
                }
            }
        }

        let mut memberships: HashMap<i32, Vec<i32>> = HashMap::new();
        let mut projects: HashMap<i32, Project> = HashMap::new();
        if relations.projects {
            let project_repo = ProjectRepository::new(self.db);
            memberships = project_repo.project_ids_for_members(&user_ids).await?;

            let mut ids: Vec<i32> = memberships.values().flatten().copied().collect();
            ids.sort_unstable();
            ids.dedup();

            projects = project_repo
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|project| (project.id, project))
                .collect();
        }

        Ok(users
            .into_iter()
            .map(|user| UserWithRelations {
                tasks: relations
                    .tasks
                    .then(|| tasks.remove(&user.id).unwrap_or_default()),
                projects: relations.projects.then(|| {
                    memberships
                        .remove(&user.id)
                        .unwrap_or_default()
                        .iter()
                        .filter_map(|id| projects.get(id).cloned())
                        .collect()
                }),
                user,
            })
            .collect())
    }
}

/// Turns a unique-index violation on insert or update into the same conflict the
/// up-front check reports, for requests that race each other.
fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("User already exists".to_string())
        }
        _ => err.into(),
    }
}
