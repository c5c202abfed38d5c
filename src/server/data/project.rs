//! Project data repository for database operations.
//!
//! Projects are always returned with their member ids. Membership rows live in the
//! `project_member` join table and are loaded for a whole batch of projects with one
//! `IN` query.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::project::{NewProject, Project, ProjectFilter, UpdateProjectParams};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists projects ordered by id, optionally restricted to one member's projects.
    ///
    /// # Returns
    /// - `Ok(Vec<Project>)` - Matching projects with their member ids
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, filter: &ProjectFilter) -> Result<Vec<Project>, DbErr> {
        let mut query = entity::project::Entity::find();

        if let Some(member_id) = filter.member_id {
            let project_ids = self.project_ids_for_member(member_id).await?;
            query = query.filter(entity::project::Column::Id.is_in(project_ids));
        }

        let projects = query
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        self.attach_members(projects).await
    }

    /// Gets a project by id with its member ids.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Project found
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let Some(project) = entity::project::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let member_ids = self.member_ids(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(Project::from_entity(project, member_ids)))
    }

    /// Fetches every project whose id is in `ids`, skipping ids without a row.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Project>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let projects = entity::project::Entity::find()
            .filter(entity::project::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        self.attach_members(projects).await
    }

    /// Inserts a project and one membership row per member.
    ///
    /// # Returns
    /// - `Ok(Project)` - The created project
    /// - `Err(DbErr)` - Database error during insert; rows already written stay
    pub async fn create(&self, params: NewProject) -> Result<Project, DbErr> {
        let now = Utc::now();
        let project = entity::project::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            due_date: ActiveValue::Set(params.due_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_members(project.id, &params.member_ids).await?;

        Ok(Project::from_entity(project, params.member_ids))
    }

    /// Applies a partial update and, when `member_ids` is provided, replaces the
    /// membership set.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The updated project
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, DbErr> {
        let Some(project) = entity::project::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::project::ActiveModel = project.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(start_date) = params.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(due_date) = params.due_date {
            active_model.due_date = ActiveValue::Set(due_date);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let project = active_model.update(self.db).await?;

        if let Some(member_ids) = params.member_ids {
            self.replace_members(id, &member_ids).await?;
        }

        let member_ids = self.member_ids(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(Project::from_entity(project, member_ids)))
    }

    /// Deletes a project's membership rows and then the project itself.
    ///
    /// Tasks and issues must already be gone.
    ///
    /// # Returns
    /// - `Ok(true)` - Project deleted
    /// - `Ok(false)` - No project with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::project_member::Entity::delete_many()
            .filter(entity::project_member::Column::ProjectId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::project::Entity::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the whole membership set of a project.
    pub async fn replace_members(&self, project_id: i32, member_ids: &[i32]) -> Result<(), DbErr> {
        entity::project_member::Entity::delete_many()
            .filter(entity::project_member::Column::ProjectId.eq(project_id))
            .exec(self.db)
            .await?;

        self.insert_members(project_id, member_ids).await
    }

    /// Removes a user from every project they are a member of.
    pub async fn remove_member_everywhere(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::project_member::Entity::delete_many()
            .filter(entity::project_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the member ids of each project in `project_ids`.
    ///
    /// Projects without members are absent from the map.
    pub async fn member_ids(&self, project_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::project_member::Entity::find()
            .filter(entity::project_member::Column::ProjectId.is_in(project_ids.iter().copied()))
            .order_by_asc(entity::project_member::Column::UserId)
            .all(self.db)
            .await?;

        let mut members: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            members.entry(row.project_id).or_default().push(row.user_id);
        }

        Ok(members)
    }

    /// Returns the ids of the projects a user is a member of, ascending.
    pub async fn project_ids_for_member(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(self
            .project_ids_for_members(&[user_id])
            .await?
            .remove(&user_id)
            .unwrap_or_default())
    }

    /// Returns the project ids of each user in `user_ids`.
    ///
    /// Users without projects are absent from the map.
    pub async fn project_ids_for_members(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::project_member::Entity::find()
            .filter(entity::project_member::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::project_member::Column::ProjectId)
            .all(self.db)
            .await?;

        let mut projects: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            projects.entry(row.user_id).or_default().push(row.project_id);
        }

        Ok(projects)
    }

    /// Counts the distinct users that are members of at least one of the projects.
    pub async fn count_distinct_members(&self, project_ids: &[i32]) -> Result<u64, DbErr> {
        let members: HashSet<i32> = self
            .member_ids(project_ids)
            .await?
            .into_values()
            .flatten()
            .collect();

        Ok(members.len() as u64)
    }

    /// Counts all projects.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::project::Entity::find().count(self.db).await
    }

    async fn insert_members(&self, project_id: i32, member_ids: &[i32]) -> Result<(), DbErr> {
        for &user_id in member_ids {
            entity::project_member::ActiveModel {
                project_id: ActiveValue::Set(project_id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn attach_members(
        &self,
        projects: Vec<entity::project::Model>,
    ) -> Result<Vec<Project>, DbErr> {
        let ids: Vec<i32> = projects.iter().map(|p| p.id).collect();
        let mut members = self.member_ids(&ids).await?;

        Ok(projects
            .into_iter()
            .map(|project| {
                let member_ids = members.remove(&project.id).unwrap_or_default();
                Project::from_entity(project, member_ids)
            })
            .collect())
    }
}
