//! Issue data repository.
//!
//! `IssueRepository` implements [`WorkItemRepository`] over the `issue` table.

use async_trait::async_trait;
use chrono::Utc;
use entity::sea_orm_active_enums::WorkStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Value,
};

use crate::server::{
    data::work_item::{work_item_repository, WorkItemRepository},
    model::work_item::{IssueKind, NewWorkItem, UpdateWorkItemParams, WorkItem, WorkItemFilter},
};

work_item_repository!(IssueRepository, issue, IssueKind);
