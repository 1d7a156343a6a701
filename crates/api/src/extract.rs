//! Extractors that report rejections as [`AppError`] JSON.
//!
//! axum's own `Json`, `Path` and `Query` reject with plain-text bodies; these
//! wrappers run the same extraction and convert the rejection, so every
//! failure a client can trigger uses the `{"error", "code"}` shape.

use std::marker::PhantomData;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use creative_hub_core::content::ModeratedContent;
use creative_hub_core::error::CoreError;
use creative_hub_core::types::EntityId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body. Bodies that are not valid JSON or do not fit the
/// target type are validation errors.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

/// Path parameters.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ApiPath(value))
    }
}

/// Query string parameters.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}

/// The `{id}` of a record in the collection of `T`.
///
/// A value that is not a UUID cannot name any record, so it is reported as
/// not found rather than as a malformed URL.
#[derive(Debug)]
pub struct ContentId<T> {
    pub id: EntityId,
    kind: PhantomData<fn() -> T>,
}

impl<T, S> FromRequestParts<S> for ContentId<T>
where
    T: ModeratedContent,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiPath(raw) = ApiPath::<String>::from_request_parts(parts, state).await?;
        let id = raw.parse::<EntityId>().map_err(|_| {
            AppError::NotFound(format!(
                "{} with id {raw} not found",
                T::KIND.entity_name()
            ))
        })?;
        Ok(ContentId {
            id,
            kind: PhantomData,
        })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => AppError::BadRequest(rejection.body_text()),
            other => AppError::Core(CoreError::Validation(other.body_text())),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
