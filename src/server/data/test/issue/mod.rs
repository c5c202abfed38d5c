use crate::server::{
    data::{issue::IssueRepository, task::TaskRepository, work_item::WorkItemRepository},
    model::work_item::{UpdateWorkItemParams, WorkItemFilter},
};
use entity::sea_orm_active_enums::WorkStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod table;
