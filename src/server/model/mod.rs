//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry input that has
//! already passed the store-independent checks (required fields, dates, empty updates),
//! so services only need to enforce the rules that depend on stored data.

pub mod dashboard;
pub mod project;
pub mod relation;
pub mod user;
pub mod work_item;
