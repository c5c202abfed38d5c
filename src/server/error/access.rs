use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AccessError {
    /// A project-scoped read named a user who is not a member of the project.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} is not a member of project {project_id}")]
    NotProjectMember {
        /// Project that was requested.
        project_id: i32,
        /// User named by the `userId` filter.
        user_id: i32,
    },
}

/// Converts access errors into HTTP responses.
///
/// Every variant is a 403 Forbidden. The detailed reason is logged at debug level while
/// the client receives a short message that does not reveal the membership list.
impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotProjectMember { .. } => (
                StatusCode::FORBIDDEN,
                Json(MessageDto::failure("You do not have access to this project")),
            )
                .into_response(),
        }
    }
}
