use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the content store is reachable.
    pub store_healthy: bool,
}

/// GET /health -- returns service and store health.
///
/// The in-memory backend is always healthy.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = match &state.pool {
        Some(pool) => creative_hub_db::health_check(pool).await.is_ok(),
        None => true,
    };

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
