use crate::server::{
    data::{task::TaskRepository, work_item::WorkItemRepository},
    model::work_item::{NewWorkItem, UpdateWorkItemParams, WorkItemFilter},
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{WorkPriority, WorkStatus};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod delete;
mod find;
mod update;

fn new_task(title: &str) -> NewWorkItem {
    NewWorkItem {
        title: title.to_string(),
        description: None,
        notes: Some("first draft".to_string()),
        due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        status: WorkStatus::New,
        priority: WorkPriority::High,
        assigned_to_id: None,
    }
}
