//! Route definitions shared by the moderated collections.

use axum::routing::{delete, get, patch};
use axum::Router;
use creative_hub_core::content::ModeratedContent;

use crate::handlers::moderation;
use crate::state::{AppState, ContentServices};

/// Routes for one collection, nested under `/{collection}`.
///
/// ```text
/// GET    /                 list (?status=pending|approved|rejected|all)
/// POST   /                 create (always pending)
/// DELETE /{id}             delete
/// PATCH  /{id}/status      transition
/// ```
pub fn router<T>() -> Router<AppState>
where
    T: ModeratedContent,
    AppState: ContentServices<T>,
{
    Router::new()
        .route("/", get(moderation::list::<T>).post(moderation::create::<T>))
        .route("/{id}", delete(moderation::delete::<T>))
        .route("/{id}/status", patch(moderation::update_status::<T>))
}
