//! JWT-based authentication extractors for Axum handlers.
//!
//! Tokens only carry the caller's email; the role is looked up in the role
//! store on every request so role changes apply immediately.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use creative_hub_core::caller::Caller;
use creative_hub_core::error::CoreError;
use creative_hub_core::roles::Role;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Rejects the request with 401 when the header is missing or the token is
/// invalid.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's email (from `claims.sub`), lowercased.
    pub identity: String,
    /// Role resolved from the role store.
    pub role: Role,
}

impl AuthUser {
    pub fn caller(&self) -> Caller {
        Caller::authenticated(self.identity.clone(), self.role)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        authenticate(auth_header, state).await
    }
}

/// The request's [`Caller`], anonymous when no `Authorization` header is sent.
///
/// A header that is present but invalid is still rejected with 401, so a
/// stale token never silently downgrades to anonymous access.
#[derive(Debug, Clone)]
pub struct CallerContext(pub Caller);

impl FromRequestParts<AppState> for CallerContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get("authorization") else {
            return Ok(CallerContext(Caller::anonymous()));
        };
        let header = header.to_str().map_err(|_| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization header".into(),
            ))
        })?;

        let user = authenticate(header, state).await?;
        Ok(CallerContext(user.caller()))
    }
}

async fn authenticate(auth_header: &str, state: &AppState) -> Result<AuthUser, AppError> {
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    let identity = claims.sub.to_lowercase();
    let role = state
        .roles
        .resolve_role(&identity)
        .await
        .map_err(|e| CoreError::Internal(format!("Role lookup failed: {e}")))?;

    Ok(AuthUser { identity, role })
}
