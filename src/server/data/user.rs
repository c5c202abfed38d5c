//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Password hashes go in through `NewUserRecord` / `UserChanges` and never come back out:
//! every read converts to the `User` domain model at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{NewUserRecord, User, UserChanges, UserFilter};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists users matching the filter, ordered by id.
    ///
    /// # Arguments
    /// - `filter` - Optional role and active-flag filters
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, DbErr> {
        let mut query = entity::user::Entity::find();

        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }
        if let Some(active) = filter.active {
            query = query.filter(entity::user::Column::Active.eq(active));
        }

        let users = query
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::user::Entity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Fetches every user whose id is in `ids` with a single `IN` query.
    ///
    /// Ids without a matching row are silently skipped; callers compare lengths when
    /// they need to know which ids did not resolve.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::user::Entity::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by login name.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user already holds the name
    /// - `Ok(None)` - Name is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::user::Entity::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `record` - User fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including unique violations on
    ///   `username`
    pub async fn create(&self, record: NewUserRecord) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            fullname: ActiveValue::Set(record.fullname),
            username: ActiveValue::Set(record.username),
            password_hash: ActiveValue::Set(record.password_hash),
            role: ActiveValue::Set(record.role),
            avatar_url: ActiveValue::Set(record.avatar_url),
            active: ActiveValue::Set(record.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Applies the provided column changes to a user.
    ///
    /// Only `Some` fields are written; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::user::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();

        if let Some(fullname) = changes.fullname {
            active_model.fullname = ActiveValue::Set(fullname);
        }
        if let Some(username) = changes.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = changes.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(role) = changes.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(active) = changes.active {
            active_model.active = ActiveValue::Set(active);
        }
        if let Some(avatar_url) = changes.avatar_url {
            active_model.avatar_url = ActiveValue::Set(avatar_url);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user row.
    ///
    /// Memberships and assignments are cleaned up by the service beforehand.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::user::Entity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::user::Entity::find().count(self.db).await
    }
}
