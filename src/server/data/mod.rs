//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models, keeping entity types out of the service layer. Every write is issued
//! immediately; there is no write-behind caching. Avatar files are the one piece of
//! state kept outside the database, handled by `AvatarStore`.

pub mod avatar;
pub mod issue;
pub mod project;
pub mod task;
pub mod user;
pub mod work_item;

#[cfg(test)]
mod test;
