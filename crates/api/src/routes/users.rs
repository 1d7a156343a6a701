use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Role routes, nested under `/users`.
///
/// ```text
/// GET    /{email}/role     get_role
/// PUT    /{email}/role     assign_role (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{email}/role", get(users::get_role).put(users::assign_role))
}
