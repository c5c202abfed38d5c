//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let project = factory::project::create_project(&db, &[user.id]).await?;
//! let task = factory::task::create_task(&db, project.id).await?;
//!
//! let (user, project) = factory::helpers::create_project_with_member(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let task = factory::task::TaskFactory::new(&db, project.id)
//!     .title("Write docs")
//!     .status(WorkStatus::InReview)
//!     .assigned_to(Some(user.id))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod issue;
pub mod project;
pub mod task;
pub mod user;

pub use issue::create_issue;
pub use project::create_project;
pub use task::create_task;
pub use user::create_user;
