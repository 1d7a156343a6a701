pub mod contact;
pub mod health;
pub mod moderation;
pub mod users;

use axum::Router;
use creative_hub_core::content::{ModeratedContent, Project, TeamMember, Testimonial};

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                            list (?status=), create
/// /projects/{id}                       delete
/// /projects/{id}/status                approve / reject (PATCH)
///
/// /teams                               same shape as /projects
/// /testimonials                        same shape as /projects
///
/// /users/{email}/role                  get, assign (PUT)
///
/// /contact                             submit enquiry (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(&collection_path::<Project>(), moderation::router::<Project>())
        .nest(&collection_path::<TeamMember>(), moderation::router::<TeamMember>())
        .nest(&collection_path::<Testimonial>(), moderation::router::<Testimonial>())
        .nest("/users", users::router())
        .merge(contact::router())
}

fn collection_path<T: ModeratedContent>() -> String {
    format!("/{}", T::KIND.collection())
}
