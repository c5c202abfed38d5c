//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a project that has that user as its only member.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, project))` - Created user and project
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_member(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::project::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let project = crate::factory::project::create_project(db, &[user.id]).await?;

    Ok((user, project))
}
