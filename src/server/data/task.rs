//! Task data repository.
//!
//! `TaskRepository` implements [`WorkItemRepository`] over the `task` table.

use async_trait::async_trait;
use chrono::Utc;
use entity::sea_orm_active_enums::WorkStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Value,
};

use crate::server::{
    data::work_item::{work_item_repository, WorkItemRepository},
    model::work_item::{TaskKind, NewWorkItem, UpdateWorkItemParams, WorkItem, WorkItemFilter},
};

work_item_repository!(TaskRepository, task, TaskKind);
