use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::UserRole;
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::payload::{PathParam, QueryParams, UserForm},
        model::{
            relation::UserRelations,
            user::{CreateUserParams, UpdateUserParams, UserFilter},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    pub include: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub include: Option<String>,
}

/// List users.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `role` and `active` filters and `include` relations
///
/// # Returns
/// - `200 OK` - Users ordered by id
/// - `400 Bad Request` - Unknown `include` name or invalid filter value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("role" = Option<String>, Query, description = "Only users with this role: user, admin"),
        ("active" = Option<bool>, Query, description = "Only active or inactive users"),
        ("include" = Option<String>, Query, description = "Comma separated: tasks, projects")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = ApiResponse<Vec<UserDto>>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let relations = UserRelations::parse(query.include.as_deref())?;

    let users = UserService::new(&state.db, &state.avatars)
        .list(
            UserFilter {
                role: query.role,
                active: query.active,
            },
            relations,
        )
        .await?;

    Ok(Json(ApiResponse::ok(
        users.into_iter().map(|user| user.into_dto()).collect::<Vec<_>>(),
    )))
}

/// Get a user by id.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("include" = Option<String>, Query, description = "Comma separated: tasks, projects")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid query", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<UserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let relations = UserRelations::parse(query.include.as_deref())?;

    let user = UserService::new(&state.db, &state.avatars)
        .get(id, relations)
        .await?;

    Ok(Json(ApiResponse::ok(user.into_dto())))
}

/// Create a user.
///
/// Accepts JSON or `multipart/form-data`. A multipart request may carry an `avatar`
/// image, stored under `/uploads/avatars/`.
///
/// # Arguments
/// - `state` - Application state containing the database connection and avatar store
/// - `form` - User fields and the optional avatar
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Missing fields, non-image avatar or a taken username
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body(
        content = CreateUserDto,
        content_type = "application/json",
        description = "Also accepted as multipart/form-data with an optional `avatar` file"
    ),
    responses(
        (status = 201, description = "Successfully created user", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data or username taken", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    form: UserForm<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(form.payload, form.avatar)?;

    let user = UserService::new(&state.db, &state.avatars)
        .create(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            user.into_dto(),
            "User created successfully",
        )),
    ))
}

/// Update a user.
///
/// Accepts JSON or `multipart/form-data` like creation. A new password is hashed
/// before it is stored.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - No fields, non-image avatar or a taken username
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body(
        content = UpdateUserDto,
        content_type = "application/json",
        description = "Also accepted as multipart/form-data with an optional `avatar` file"
    ),
    responses(
        (status = 200, description = "Successfully updated user", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data or username taken", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    form: UserForm<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateUserParams::from_dto(form.payload, form.avatar)?;

    let user = UserService::new(&state.db, &state.avatars)
        .update(id, params)
        .await?;

    Ok(Json(ApiResponse::with_message(
        user.into_dto(),
        "User updated successfully",
    )))
}

/// Delete a user.
///
/// Tasks and issues assigned to the user are kept and become unassigned; the user is
/// removed from every project.
///
/// # Returns
/// - `200 OK` - User deleted
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db, &state.avatars)
        .delete(id)
        .await?;

    Ok(Json(MessageDto::success("User deleted successfully")))
}
