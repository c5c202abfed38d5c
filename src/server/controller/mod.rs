//! HTTP handlers.
//!
//! Handlers extract the request, convert DTOs into parameter types, call a service
//! and wrap the result in the `{ success, data, message }` envelope.

pub mod dashboard;
pub mod issue;
pub mod project;
pub mod task;
pub mod user;
pub mod work_item;
