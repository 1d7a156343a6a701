//! Handlers for the `/users/{email}/role` resource.

use axum::extract::State;
use axum::Json;
use creative_hub_core::caller::{authorize, Capability};
use creative_hub_core::error::CoreError;
use creative_hub_core::roles::Role;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::response::{RoleAssignment, RoleResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignRoleRequest {
    pub role: Role,
}

/// GET /api/v1/users/{email}/role
///
/// Unknown identities resolve to `user`.
pub async fn get_role(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(email): ApiPath<String>,
) -> AppResult<Json<RoleResponse>> {
    let email = normalize_email(&email)?;
    authorize(&user.caller(), Capability::ReadRole(&email))?;

    let role = state
        .roles
        .resolve_role(&email)
        .await
        .map_err(|e| CoreError::Retrieval(e.to_string()))?;
    Ok(Json(RoleResponse { role }))
}

/// PUT /api/v1/users/{email}/role
pub async fn assign_role(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(email): ApiPath<String>,
    ApiJson(input): ApiJson<AssignRoleRequest>,
) -> AppResult<Json<RoleAssignment>> {
    let email = normalize_email(&email)?;
    authorize(&user.caller(), Capability::AssignRole)?;

    state
        .roles
        .assign_role(&email, input.role)
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?;

    tracing::info!(email = %email, role = %input.role, operator = %user.identity, "Role assigned");

    Ok(Json(RoleAssignment {
        email,
        role: input.role,
    }))
}

/// Lowercase the path identity; anything without an `@` cannot be a login.
fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::BadRequest(format!("'{raw}' is not an email address")));
    }
    Ok(email)
}
