use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        issue::IssueRepository, project::ProjectRepository, task::TaskRepository,
        user::UserRepository, work_item::WorkItemRepository,
    },
    error::AppError,
    model::{
        project::{
            CreateProjectParams, Project, ProjectFilter, ProjectWithRelations, UpdateProjectParams,
        },
        relation::ProjectRelations,
        user::User,
        work_item::{NewWorkItem, WorkItem, WorkItemFilter},
    },
    service::rules::{ensure_users_exist, require_project},
    util::validate::ensure_date_order,
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists projects, optionally only those a user is a member of.
    pub async fn list(
        &self,
        filter: ProjectFilter,
        relations: ProjectRelations,
    ) -> Result<Vec<ProjectWithRelations>, AppError> {
        let projects = ProjectRepository::new(self.db).find(&filter).await?;

        self.with_relations(projects, relations).await
    }

    /// Gets a project by id with the requested relations.
    ///
    /// # Returns
    /// - `Ok(ProjectWithRelations)` - Project found
    /// - `Err(AppError::NotFound)` - No project with that id
    pub async fn get(
        &self,
        id: i32,
        relations: ProjectRelations,
    ) -> Result<ProjectWithRelations, AppError> {
        let project = require_project(self.db, id).await?;

        let mut projects = self.with_relations(vec![project], relations).await?;
        projects
            .pop()
            .ok_or_else(|| AppError::not_found("Project", id))
    }

    /// Creates a project, its memberships and any nested tasks and issues.
    ///
    /// Every member must exist and every nested assignee must be one of the new
    /// project's members; both are checked before anything is written.
    ///
    /// # Returns
    /// - `Ok(ProjectWithRelations)` - The project, with `tasks` / `issues` set when
    ///   nested items were created
    /// - `Err(AppError::Validation)` - Unknown member ids or a non-member assignee
    pub async fn create(&self, params: CreateProjectParams) -> Result<ProjectWithRelations, AppError> {
        let CreateProjectParams {
            project,
            tasks,
            issues,
        } = params;

        ensure_users_exist(self.db, &project.member_ids).await?;
        ensure_nested_assignees("tasks", &tasks, &project.member_ids)?;
        ensure_nested_assignees("issues", &issues, &project.member_ids)?;

        let project = ProjectRepository::new(self.db).create(project).await?;

        let task_repo = TaskRepository::new(self.db);
        let mut created_tasks = Vec::with_capacity(tasks.len());
        for item in tasks {
            created_tasks.push(task_repo.create(project.id, item).await?);
        }

        let issue_repo = IssueRepository::new(self.db);
        let mut created_issues = Vec::with_capacity(issues.len());
        for item in issues {
            created_issues.push(issue_repo.create(project.id, item).await?);
        }

        tracing::info!(
            "Created project {} with {} members, {} tasks and {} issues",
            project.id,
            project.member_ids.len(),
            created_tasks.len(),
            created_issues.len()
        );

        Ok(ProjectWithRelations {
            project,
            tasks: (!created_tasks.is_empty()).then_some(created_tasks),
            issues: (!created_issues.is_empty()).then_some(created_issues),
            members: None,
        })
    }

    /// Applies a partial update.
    ///
    /// Dates are checked against the merged result. A replacement member list must name
    /// existing users and must keep every user who is still assigned work in the project.
    ///
    /// # Returns
    /// - `Ok(Project)` - The updated project
    /// - `Err(AppError::NotFound)` - No project with that id
    /// - `Err(AppError::Validation)` - Dates out of order, unknown users or a removed
    ///   member with assignments
    pub async fn update(&self, id: i32, params: UpdateProjectParams) -> Result<Project, AppError> {
        let current = require_project(self.db, id).await?;

        ensure_date_order(
            params.start_date.unwrap_or(current.start_date),
            params.due_date.unwrap_or(current.due_date),
        )?;

        if let Some(member_ids) = &params.member_ids {
            ensure_users_exist(self.db, member_ids).await?;

            let removed: Vec<i32> = current
                .member_ids
                .iter()
                .copied()
                .filter(|id| !member_ids.contains(id))
                .collect();

            if !removed.is_empty() {
                let assigned = TaskRepository::new(self.db)
                    .count_assigned(id, &removed)
                    .await?
                    + IssueRepository::new(self.db)
                        .count_assigned(id, &removed)
                        .await?;

                if assigned > 0 {
                    return Err(AppError::Validation(format!(
                        "Cannot remove users with assigned tasks or issues from project {}: {}",
                        id,
                        join_ids(&removed)
                    )));
                }
            }
        }

        ProjectRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found("Project", id))
    }

    /// Deletes a project with its tasks, issues and memberships, in that order.
    ///
    /// The steps are separate statements; a failure part way leaves the earlier deletes
    /// in place.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        require_project(self.db, id).await?;

        let tasks = TaskRepository::new(self.db).delete_by_project(id).await?;
        let issues = IssueRepository::new(self.db).delete_by_project(id).await?;

        if !ProjectRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found("Project", id));
        }

        tracing::info!(
            "Deleted project {} along with {} tasks and {} issues",
            id,
            tasks,
            issues
        );

        Ok(())
    }

    /// Resolves the requested relations for all projects with one query per relation.
    async fn with_relations(
        &self,
        projects: Vec<Project>,
        relations: ProjectRelations,
    ) -> Result<Vec<ProjectWithRelations>, AppError> {
        let project_ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
        let filter = WorkItemFilter {
            project_ids: Some(project_ids),
            assigned_to_ids: None,
        };

        let mut tasks = if relations.tasks {
            group_by_project(TaskRepository::new(self.db).find(&filter).await?)
        } else {
            HashMap::new()
        };

        let mut issues = if relations.issues {
            group_by_project(IssueRepository::new(self.db).find(&filter).await?)
        } else {
            HashMap::new()
        };

        let users: HashMap<i32, User> = if relations.members {
            let mut ids: Vec<i32> = projects
                .iter()
                .flat_map(|p| p.member_ids.iter().copied())
                .collect();
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

        Ok(projects
            .into_iter()
            .map(|project| {
                let members = relations.members.then(|| {
                    project
                        .member_ids
                        .iter()
                        .filter_map(|id| users.get(id).cloned())
                        .collect()
                });

                ProjectWithRelations {
                    tasks: relations
                        .tasks
                        .then(|| tasks.remove(&project.id).unwrap_or_default()),
                    issues: relations
                        .issues
                        .then(|| issues.remove(&project.id).unwrap_or_default()),
                    members,
                    project,
                }
            })
            .collect())
    }
}

fn group_by_project<K>(items: Vec<WorkItem<K>>) -> HashMap<i32, Vec<WorkItem<K>>> {
    let mut grouped: HashMap<i32, Vec<WorkItem<K>>> = HashMap::new();
    for item in items {
        grouped.entry(item.project_id).or_default().push(item);
    }
    grouped
}

fn ensure_nested_assignees(
    field: &str,
    items: &[NewWorkItem],
    member_ids: &[i32],
) -> Result<(), AppError> {
    for (index, item) in items.iter().enumerate() {
        if let Some(user_id) = item.assigned_to_id {
            if !member_ids.contains(&user_id) {
                return Err(AppError::Validation(format!(
                    "{}[{}]: User {} is not assigned to the project",
                    field, index, user_id
                )));
            }
        }
    }

    Ok(())
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
