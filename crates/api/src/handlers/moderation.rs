//! Handlers shared by every moderated collection.
//!
//! Each handler is generic over the content kind and is mounted once per
//! collection by [`crate::routes::moderation::router`]. Capability checks
//! happen inside [`ModerationService`](creative_hub_core::service::ModerationService).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use creative_hub_core::content::{Moderated, ModeratedContent, Submission};
use creative_hub_core::moderation::ModerationStatus;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery, ContentId};
use crate::middleware::auth::{AuthUser, CallerContext};
use crate::query::StatusQuery;
use crate::response::SuccessResponse;
use crate::state::{AppState, ContentServices};

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ModerationStatus,
}

/// GET /api/v1/{collection}?status=
pub async fn list<T>(
    State(state): State<AppState>,
    CallerContext(caller): CallerContext,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> AppResult<Json<Vec<Moderated<T>>>>
where
    T: ModeratedContent,
    AppState: ContentServices<T>,
{
    let filter = query.filter()?;
    let records = ContentServices::<T>::moderation(&state)
        .list_by_status(&caller, filter)
        .await?;
    Ok(Json(records))
}

/// POST /api/v1/{collection}
pub async fn create<T>(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(submission): ApiJson<Submission<T>>,
) -> AppResult<(StatusCode, Json<Moderated<T>>)>
where
    T: ModeratedContent,
    AppState: ContentServices<T>,
{
    let record = ContentServices::<T>::moderation(&state)
        .create(&user.caller(), submission)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/v1/{collection}/{id}/status
pub async fn update_status<T>(
    State(state): State<AppState>,
    user: AuthUser,
    target: ContentId<T>,
    ApiJson(input): ApiJson<StatusUpdate>,
) -> AppResult<Json<SuccessResponse>>
where
    T: ModeratedContent,
    AppState: ContentServices<T>,
{
    let success = ContentServices::<T>::moderation(&state)
        .transition(&user.caller(), target.id, input.status)
        .await?;
    Ok(Json(SuccessResponse { success }))
}

/// DELETE /api/v1/{collection}/{id}
pub async fn delete<T>(
    State(state): State<AppState>,
    user: AuthUser,
    target: ContentId<T>,
) -> AppResult<Json<SuccessResponse>>
where
    T: ModeratedContent,
    AppState: ContentServices<T>,
{
    let success = ContentServices::<T>::moderation(&state)
        .delete(&user.caller(), target.id)
        .await?;
    Ok(Json(SuccessResponse { success }))
}
