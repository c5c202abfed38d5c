//! SeaORM entities for the workboard schema.
//!
//! Users, projects (with their membership join table), tasks and issues. Tasks and
//! issues share the same shape and the same status and priority enums but live in
//! separate tables.

pub mod prelude;

pub mod issue;
pub mod project;
pub mod project_member;
pub mod sea_orm_active_enums;
pub mod task;
pub mod user;
