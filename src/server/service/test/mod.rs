use crate::{
    model::{
        project::{CreateProjectDto, UpdateProjectDto},
        user::CreateUserDto,
        work_item::NewWorkItemDto,
    },
    server::{
        data::avatar::AvatarStore,
        error::AppError,
        model::{
            project::{CreateProjectParams, ProjectFilter, UpdateProjectParams},
            relation::{ProjectRelations, UserRelations, WorkItemRelations},
            user::{AvatarUpload, CreateUserParams, UpdateUserParams},
            work_item::{CreateWorkItemParams, NewWorkItem, UpdateWorkItemParams, WorkItemQuery},
        },
        service::{
            dashboard::DashboardService,
            project::ProjectService,
            user::UserService,
            work_item::{IssueService, TaskService},
        },
    },
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{UserRole, WorkPriority, WorkStatus};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod work_item;

fn new_item(title: &str, assigned_to_id: Option<i32>) -> NewWorkItem {
    NewWorkItem {
        title: title.to_string(),
        description: None,
        notes: None,
        due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        status: WorkStatus::New,
        priority: WorkPriority::Medium,
        assigned_to_id,
    }
}
