//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules that
//! need stored data (existence, project membership, login-name uniqueness), coordinate
//! multi-repository operations such as cascading project deletion and resolve the
//! relations requested through `include` with batched queries.
//!
//! Every check runs before the first write of an operation, so a rejected request leaves
//! the store untouched.

pub mod dashboard;
pub mod project;
pub mod rules;
pub mod user;
pub mod work_item;

#[cfg(test)]
mod test;
