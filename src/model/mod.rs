//! Wire types shared by every endpoint.
//!
//! These DTOs define the JSON contract of the API: camelCase field names, calendar
//! dates as `YYYY-MM-DD` strings and the `{ success, data?, message? }` envelope.

pub mod api;
pub mod dashboard;
pub mod nullable;
pub mod project;
pub mod user;
pub mod work_item;
