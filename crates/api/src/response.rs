//! Shared response envelopes for API handlers.

use creative_hub_core::roles::Role;
use serde::Serialize;

/// `{"success": bool}` -- returned by status changes, deletes and contact
/// submissions.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: Role,
}

/// Echo of a stored role assignment.
#[derive(Debug, Serialize)]
pub struct RoleAssignment {
    pub email: String,
    pub role: Role,
}
