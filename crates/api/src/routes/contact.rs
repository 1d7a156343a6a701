use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Public contact form route, merged at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(contact::submit))
}
