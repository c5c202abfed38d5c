//! Application state shared across all request handlers.
//!
//! The state is built once in `main` and cloned into every handler through Axum's
//! state extraction. Both fields are cheap to clone: `DatabaseConnection` is a pool
//! handle and `AvatarStore` only holds a path.

use sea_orm::DatabaseConnection;

use crate::server::data::avatar::AvatarStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by all requests.
    pub db: DatabaseConnection,

    /// Filesystem location for uploaded avatars.
    pub avatars: AvatarStore,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `avatars` - Avatar store rooted in the configured upload directory
    pub fn new(db: DatabaseConnection, avatars: AvatarStore) -> Self {
        Self { db, avatars }
    }
}
