//! Generic service for tasks and issues.
//!
//! `WorkItemService<R>` is written once against the `WorkItemRepository` trait and
//! instantiated as `TaskService` and `IssueService`.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        issue::IssueRepository, project::ProjectRepository, task::TaskRepository,
        user::UserRepository, work_item::WorkItemRepository,
    },
    error::AppError,
    model::{
        project::Project,
        relation::WorkItemRelations,
        user::User,
        work_item::{
            CreateWorkItemParams, UpdateWorkItemParams, WorkItem, WorkItemFilter, WorkItemKind,
            WorkItemQuery, WorkItemWithRelations,
        },
    },
    service::rules::{ensure_assignee_is_member, require_project},
};

pub type TaskService<'a> = WorkItemService<'a, TaskRepository>;
pub type IssueService<'a> = WorkItemService<'a, IssueRepository>;

pub struct WorkItemService<'a, R> {
    db: &'a DatabaseConnection,
    repo: R,
}

impl<'a, R: WorkItemRepository> WorkItemService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            repo: R::new(db),
        }
    }

    /// Lists work items matching the query.
    ///
    /// `member_id` narrows to the projects the user belongs to; `project_id` and
    /// `assigned_to_id` narrow further. Filters combine with AND.
    pub async fn list(
        &self,
        query: WorkItemQuery,
        relations: WorkItemRelations,
    ) -> Result<Vec<WorkItemWithRelations<R::Kind>>, AppError> {
        let mut project_ids = match query.member_id {
            Some(member_id) => Some(
                ProjectRepository::new(self.db)
                    .project_ids_for_member(member_id)
                    .await?,
            ),
            None => None,
        };

        if let Some(project_id) = query.project_id {
            project_ids = Some(match project_ids {
                Some(ids) => ids.into_iter().filter(|id| *id == project_id).collect(),
                None => vec![project_id],
            });
        }

        let filter = WorkItemFilter {
            project_ids,
            assigned_to_ids: query.assigned_to_id.map(|id| vec![id]),
        };

        let items = self.repo.find(&filter).await?;

        self.with_relations(items, relations).await
    }

    /// Gets a work item by id with the requested relations.
    ///
    /// # Returns
    /// - `Ok(WorkItemWithRelations)` - Item found
    /// - `Err(AppError::NotFound)` - No item with that id
    pub async fn get(
        &self,
        id: i32,
        relations: WorkItemRelations,
    ) -> Result<WorkItemWithRelations<R::Kind>, AppError> {
        let item = self.require(id).await?;

        let mut items = self.with_relations(vec![item], relations).await?;
        items.pop().ok_or_else(|| self.not_found(id))
    }

    /// Creates a work item after checking its project and assignee.
    ///
    /// # Returns
    /// - `Ok(WorkItem)` - The created item
    /// - `Err(AppError::NotFound)` - The project does not exist
    /// - `Err(AppError::Validation)` - The assignee is not a member of the project
    pub async fn create(&self, params: CreateWorkItemParams) -> Result<WorkItem<R::Kind>, AppError> {
        let project = require_project(self.db, params.project_id).await?;

        if let Some(user_id) = params.item.assigned_to_id {
            ensure_assignee_is_member(&project, user_id)?;
        }

        let item = self.repo.create(project.id, params.item).await?;

        tracing::debug!(
            "Created {} {} in project {}",
            <R::Kind as WorkItemKind>::LABEL,
            item.id,
            project.id
        );

        Ok(item)
    }

    /// Applies a partial update.
    ///
    /// A new assignee is checked against the item's current project.
    ///
    /// # Returns
    /// - `Ok(WorkItem)` - The updated item
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(AppError::Validation)` - The new assignee is not a project member
    pub async fn update(
        &self,
        id: i32,
        params: UpdateWorkItemParams,
    ) -> Result<WorkItem<R::Kind>, AppError> {
        let current = self.require(id).await?;

        if let Some(Some(user_id)) = params.assigned_to_id {
            let project = require_project(self.db, current.project_id).await?;
            ensure_assignee_is_member(&project, user_id)?;
        }

        self.repo
            .update(id, params)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(self.not_found(id));
        }

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<WorkItem<R::Kind>, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    fn not_found(&self, id: i32) -> AppError {
        AppError::not_found(<R::Kind as WorkItemKind>::LABEL, id)
    }

    /// Resolves the requested relations for all items with one query per relation.
    async fn with_relations(
        &self,
        items: Vec<WorkItem<R::Kind>>,
        relations: WorkItemRelations,
    ) -> Result<Vec<WorkItemWithRelations<R::Kind>>, AppError> {
        let projects: HashMap<i32, Project> = if relations.project {
            let mut ids: Vec<i32> = items.iter().map(|item| item.project_id).collect();
            ids.sort_unstable();
            ids.dedup();

            ProjectRepository::new(self.db)
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|project| (project.id, project))
                .collect()
        } else {
            HashMap::new()
        };

        let users: HashMap<i32, User> = if relations.assigned_to {
            let mut ids: Vec<i32> = items.iter().filter_map(|item| item.assigned_to_id).collect();
            ids.sort_unstable();
            ids.dedup();

            UserRepository::new(self.db)
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(items
            .into_iter()
            .map(|item| {
                let project = if relations.project {
                    projects.get(&item.project_id).cloned()
                } else {
                    None
                };
                let assigned_to = relations
                    .assigned_to
                    .then(|| item.assigned_to_id.and_then(|id| users.get(&id).cloned()));

                WorkItemWithRelations {
                    item,
                    project,
                    assigned_to,
                }
            })
            .collect())
    }
}
