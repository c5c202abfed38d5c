use crate::server::{
    data::user::UserRepository,
    model::user::{NewUserRecord, UserChanges, UserFilter},
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;

fn record(username: &str) -> NewUserRecord {
    NewUserRecord {
        fullname: "Grace Hopper".to_string(),
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: UserRole::User,
        avatar_url: None,
        active: true,
    }
}
