//! Body extractors that report malformed input as validation errors.
//!
//! axum's own `Json` rejection answers with a plain-text body; these wrappers turn
//! every body problem into `AppError::Validation` so clients always receive the
//! `{ success: false, message }` envelope.

use axum::{
    extract::{
        multipart::MultipartError, FromRequest, FromRequestParts, Multipart, Path, Query, Request,
    },
    http::{header::CONTENT_TYPE, request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::server::{
    data::avatar::MAX_UPLOAD_BYTES, error::AppError, model::user::AvatarUpload,
};

/// Multipart field carrying the avatar image.
const AVATAR_FIELD: &str = "avatar";

/// JSON body extractor with envelope-shaped rejections.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

/// Query string extractor with envelope-shaped rejections.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

/// Path parameter extractor; a non-numeric `{id}` becomes a validation error.
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

/// User create/update body, sent either as JSON or as `multipart/form-data`.
///
/// Multipart text fields are collected into a JSON object and deserialized into `T`,
/// so both encodings share one DTO. `active` is parsed as a boolean and an empty
/// `avatarUrl` clears the stored avatar. The `avatar` file field, if present, is
/// returned separately.
pub struct UserForm<T> {
    pub payload: T,
    pub avatar: Option<AvatarUpload>,
}

impl<S, T> FromRequest<S> for UserForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let JsonBody(payload) = JsonBody::<T>::from_request(req, state).await?;
            return Ok(Self {
                payload,
                avatar: None,
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        let mut fields = Map::new();
        let mut avatar = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == AVATAR_FIELD {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;

                // Browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    avatar = Some(AvatarUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                continue;
            }

            let text = field
                .text()
                .await
                .map_err(multipart_error)?;

            fields.insert(name.clone(), form_value(&name, text)?);
        }

        let payload = serde_json::from_value(Value::Object(fields))
            .map_err(|err| AppError::Validation(format!("Invalid form data: {}", err)))?;

        Ok(Self { payload, avatar })
    }
}

/// Maps a multipart read failure, naming the size limit when the body was too large.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Validation(format!(
            "Upload exceeds the {} MB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }

    AppError::Validation(err.body_text())
}

/// Converts a multipart text field into the JSON value the user DTOs expect.
fn form_value(name: &str, text: String) -> Result<Value, AppError> {
    match name {
        "active" => match text.trim() {
            "true" | "1" | "on" => Ok(Value::Bool(true)),
            "false" | "0" | "off" => Ok(Value::Bool(false)),
            other => Err(AppError::Validation(format!(
                "Invalid value for active: {}",
                other
            ))),
        },
        "avatarUrl" if text.is_empty() => Ok(Value::Null),
        _ => Ok(Value::String(text)),
    }
}
