//! Shared repository contract for tasks and issues.
//!
//! Tasks and issues live in separate tables with identical columns. The
//! `WorkItemRepository` trait is the seam the generic `WorkItemService` is written
//! against, and `work_item_repository!` generates its implementation for one table so
//! both repositories share a single body of query code.

use async_trait::async_trait;
use entity::sea_orm_active_enums::WorkStatus;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::model::work_item::{
    NewWorkItem, UpdateWorkItemParams, WorkItem, WorkItemFilter, WorkItemKind,
};

#[async_trait]
pub trait WorkItemRepository: Send + Sync + Sized {
    type Kind: WorkItemKind;

    /// Builds a repository over its own handle to the connection pool.
    fn new(db: &DatabaseConnection) -> Self;

    /// Lists items matching the filter, ordered by id.
    async fn find(&self, filter: &WorkItemFilter) -> Result<Vec<WorkItem<Self::Kind>>, DbErr>;

    async fn find_by_id(&self, id: i32) -> Result<Option<WorkItem<Self::Kind>>, DbErr>;

    async fn create(
        &self,
        project_id: i32,
        item: NewWorkItem,
    ) -> Result<WorkItem<Self::Kind>, DbErr>;

    /// Applies the provided fields; `Ok(None)` when the item does not exist.
    async fn update(
        &self,
        id: i32,
        params: UpdateWorkItemParams,
    ) -> Result<Option<WorkItem<Self::Kind>>, DbErr>;

    /// `Ok(false)` when the item does not exist.
    async fn delete(&self, id: i32) -> Result<bool, DbErr>;

    /// Deletes every item of a project, returning how many rows went away.
    async fn delete_by_project(&self, project_id: i32) -> Result<u64, DbErr>;

    /// Clears the assignee of every item assigned to the user.
    async fn unassign_user(&self, user_id: i32) -> Result<u64, DbErr>;

    /// Counts items whose status is in `statuses`, optionally limited to some projects.
    async fn count_by_status(
        &self,
        project_ids: Option<&[i32]>,
        statuses: &[WorkStatus],
    ) -> Result<u64, DbErr>;

    /// Counts the items of a project assigned to any of `user_ids`.
    async fn count_assigned(&self, project_id: i32, user_ids: &[i32]) -> Result<u64, DbErr>;
}

/// Declares `$repo` and implements [`WorkItemRepository`] for the `entity::$table` table.
///
/// The calling module must bring the SeaORM traits used by the generated code into scope.
macro_rules! work_item_repository {
    ($repo:ident, $table:ident, $kind:ty) => {
        pub struct $repo {
            db: DatabaseConnection,
        }

        #[async_trait]
        impl WorkItemRepository for $repo {
            type Kind = $kind;

            fn new(db: &DatabaseConnection) -> Self {
                Self { db: db.clone() }
            }

            async fn find(&self, filter: &WorkItemFilter) -> Result<Vec<WorkItem<$kind>>, DbErr> {
                let mut query = entity::$table::Entity::find();

                if let Some(project_ids) = &filter.project_ids {
                    query = query.filter(
                        entity::$table::Column::ProjectId.is_in(project_ids.iter().copied()),
                    );
                }
                if let Some(user_ids) = &filter.assigned_to_ids {
                    query = query.filter(
                        entity::$table::Column::AssignedToId.is_in(user_ids.iter().copied()),
                    );
                }

                let items = query
                    .order_by_asc(entity::$table::Column::Id)
                    .all(&self.db)
                    .await?;

                Ok(items.into_iter().map(WorkItem::<$kind>::from_entity).collect())
            }

            async fn find_by_id(&self, id: i32) -> Result<Option<WorkItem<$kind>>, DbErr> {
                let item = entity::$table::Entity::find_by_id(id).one(&self.db).await?;

                Ok(item.map(WorkItem::<$kind>::from_entity))
            }

            async fn create(
                &self,
                project_id: i32,
                item: NewWorkItem,
            ) -> Result<WorkItem<$kind>, DbErr> {
                let now = Utc::now();
                let entity = entity::$table::ActiveModel {
                    title: ActiveValue::Set(item.title),
                    description: ActiveValue::Set(item.description),
                    notes: ActiveValue::Set(item.notes),
                    due_date: ActiveValue::Set(item.due_date),
                    status: ActiveValue::Set(item.status),
                    priority: ActiveValue::Set(item.priority),
                    project_id: ActiveValue::Set(project_id),
                    assigned_to_id: ActiveValue::Set(item.assigned_to_id),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?;

                Ok(WorkItem::<$kind>::from_entity(entity))
            }

            async fn update(
                &self,
                id: i32,
                params: UpdateWorkItemParams,
            ) -> Result<Option<WorkItem<$kind>>, DbErr> {
                let Some(entity) = entity::$table::Entity::find_by_id(id).one(&self.db).await?
                else {
                    return Ok(None);
                };

                let mut active_model: entity::$table::ActiveModel = entity.into();

                if let Some(title) = params.title {
                    active_model.title = ActiveValue::Set(title);
                }
                if let Some(description) = params.description {
                    active_model.description = ActiveValue::Set(description);
                }
                if let Some(notes) = params.notes {
                    active_model.notes = ActiveValue::Set(notes);
                }
                if let Some(due_date) = params.due_date {
                    active_model.due_date = ActiveValue::Set(due_date);
                }
                if let Some(status) = params.status {
                    active_model.status = ActiveValue::Set(status);
                }
                if let Some(priority) = params.priority {
                    active_model.priority = ActiveValue::Set(priority);
                }
                if let Some(assigned_to_id) = params.assigned_to_id {
                    active_model.assigned_to_id = ActiveValue::Set(assigned_to_id);
                }
                active_model.updated_at = ActiveValue::Set(Utc::now());

                let entity = active_model.update(&self.db).await?;

                Ok(Some(WorkItem::<$kind>::from_entity(entity)))
            }

            async fn delete(&self, id: i32) -> Result<bool, DbErr> {
                let result = entity::$table::Entity::delete_by_id(id).exec(&self.db).await?;

                Ok(result.rows_affected > 0)
            }

            async fn delete_by_project(&self, project_id: i32) -> Result<u64, DbErr> {
                let result = entity::$table::Entity::delete_many()
                    .filter(entity::$table::Column::ProjectId.eq(project_id))
                    .exec(&self.db)
                    .await?;

                Ok(result.rows_affected)
            }

            async fn unassign_user(&self, user_id: i32) -> Result<u64, DbErr> {
                let result = entity::$table::Entity::update_many()
                    .col_expr(
                        entity::$table::Column::AssignedToId,
                        Expr::value(Value::Int(None)),
                    )
                    .filter(entity::$table::Column::AssignedToId.eq(user_id))
                    .exec(&self.db)
                    .await?;

                Ok(result.rows_affected)
            }

            async fn count_by_status(
                &self,
                project_ids: Option<&[i32]>,
                statuses: &[WorkStatus],
            ) -> Result<u64, DbErr> {
                let mut query = entity::$table::Entity::find()
                    .filter(entity::$table::Column::Status.is_in(statuses.iter().copied()));

                if let Some(project_ids) = project_ids {
                    query = query.filter(
                        entity::$table::Column::ProjectId.is_in(project_ids.iter().copied()),
                    );
                }

                query.count(&self.db).await
            }

            async fn count_assigned(&self, project_id: i32, user_ids: &[i32]) -> Result<u64, DbErr> {
                if user_ids.is_empty() {
                    return Ok(0);
                }

                entity::$table::Entity::find()
                    .filter(entity::$table::Column::ProjectId.eq(project_id))
                    .filter(entity::$table::Column::AssignedToId.is_in(user_ids.iter().copied()))
                    .count(&self.db)
                    .await
            }
        }
    };
}

pub(crate) use work_item_repository;
