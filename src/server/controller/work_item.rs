//! Handler bodies shared by the task and issue endpoints.
//!
//! The route handlers in `task` and `issue` carry the OpenAPI annotations and delegate
//! here, instantiated with the matching repository.

use axum::{http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        work_item::{CreateWorkItemDto, UpdateWorkItemDto, WorkItemDto},
    },
    server::{
        data::work_item::WorkItemRepository,
        error::AppError,
        model::{
            relation::WorkItemRelations,
            work_item::{CreateWorkItemParams, UpdateWorkItemParams, WorkItemKind, WorkItemQuery},
        },
        service::work_item::WorkItemService,
    },
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemListQuery {
    pub user_id: Option<i32>,
    pub project_id: Option<i32>,
    pub assigned_to_id: Option<i32>,
    pub include: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IncludeQuery {
    pub include: Option<String>,
}

pub(super) async fn list<R: WorkItemRepository>(
    db: &DatabaseConnection,
    query: WorkItemListQuery,
) -> Result<Json<ApiResponse<Vec<WorkItemDto>>>, AppError> {
    let relations = WorkItemRelations::parse(query.include.as_deref())?;

    let items = WorkItemService::<R>::new(db)
        .list(
            WorkItemQuery {
                member_id: query.user_id,
                project_id: query.project_id,
                assigned_to_id: query.assigned_to_id,
            },
            relations,
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        items.into_iter().map(|item| item.into_dto()).collect(),
    )))
}

pub(super) async fn get<R: WorkItemRepository>(
    db: &DatabaseConnection,
    id: i32,
    query: IncludeQuery,
) -> Result<Json<ApiResponse<WorkItemDto>>, AppError> {
    let relations = WorkItemRelations::parse(query.include.as_deref())?;

    let item = WorkItemService::<R>::new(db).get(id, relations).await?;

    Ok(Json(ApiResponse::ok(item.into_dto())))
}

pub(super) async fn create<R: WorkItemRepository>(
    db: &DatabaseConnection,
    params: CreateWorkItemParams,
) -> Result<(StatusCode, Json<ApiResponse<WorkItemDto>>), AppError> {
    let item = WorkItemService::<R>::new(db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            item.into_dto(),
            format!("{} created successfully", <R::Kind as WorkItemKind>::LABEL),
        )),
    ))
}

pub(super) async fn create_from_dto<R: WorkItemRepository>(
    db: &DatabaseConnection,
    payload: CreateWorkItemDto,
) -> Result<(StatusCode, Json<ApiResponse<WorkItemDto>>), AppError> {
    let params = CreateWorkItemParams::from_dto(payload)?;

    create::<R>(db, params).await
}

pub(super) async fn update<R: WorkItemRepository>(
    db: &DatabaseConnection,
    id: i32,
    payload: UpdateWorkItemDto,
) -> Result<Json<ApiResponse<WorkItemDto>>, AppError> {
    let params = UpdateWorkItemParams::from_dto(payload)?;

    let item = WorkItemService::<R>::new(db).update(id, params).await?;

    Ok(Json(ApiResponse::with_message(
        item.into_dto(),
        format!("{} updated successfully", <R::Kind as WorkItemKind>::LABEL),
    )))
}

pub(super) async fn delete<R: WorkItemRepository>(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Json<MessageDto>, AppError> {
    WorkItemService::<R>::new(db).delete(id).await?;

    Ok(Json(MessageDto::success(format!(
        "{} deleted successfully",
        <R::Kind as WorkItemKind>::LABEL
    ))))
}
