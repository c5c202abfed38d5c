//! Workboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the workboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for inserting users, projects, tasks and issues.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_project_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_project_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
