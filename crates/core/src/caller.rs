//! Explicit caller context and capability checks.
//!
//! Every service operation receives the [`Caller`] on whose behalf it runs
//! and checks the matching [`Capability`] before touching the store, so
//! access control does not depend on which client view is reachable.

use crate::error::CoreError;
use crate::moderation::StatusFilter;
use crate::roles::Role;

/// The identity and resolved role behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Authenticated identity (email). `None` for anonymous visitors.
    pub identity: Option<String>,
    pub role: Role,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self {
            identity: None,
            role: Role::User,
        }
    }

    pub fn authenticated(identity: impl Into<String>, role: Role) -> Self {
        Self {
            identity: Some(identity.into()),
            role,
        }
    }

    pub fn user(identity: impl Into<String>) -> Self {
        Self::authenticated(identity, Role::User)
    }

    pub fn admin(identity: impl Into<String>) -> Self {
        Self::authenticated(identity, Role::Admin)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role.is_admin()
    }
}

/// An action that needs permission.
#[derive(Debug, Clone, Copy)]
pub enum Capability<'a> {
    /// List records matching a status filter.
    List(StatusFilter),
    /// Submit new content for review.
    Submit,
    /// Approve, reject or delete content.
    Moderate,
    /// Read the role assigned to an identity.
    ReadRole(&'a str),
    /// Assign a role to an identity.
    AssignRole,
}

/// Check that `caller` holds `capability`.
///
/// Fails with `Unauthorized` when an identity is required but missing and
/// with `Forbidden` when the caller's role is insufficient.
pub fn authorize(caller: &Caller, capability: Capability<'_>) -> Result<(), CoreError> {
    match capability {
        Capability::List(filter) if filter.is_public() => Ok(()),
        Capability::List(filter) => {
            require_admin(caller, &format!("Listing '{filter}' content requires admin role"))
        }
        Capability::Submit => require_identity(caller),
        Capability::Moderate => require_admin(caller, "Admin role required"),
        Capability::ReadRole(identity) => {
            require_identity(caller)?;
            if caller.identity.as_deref() == Some(identity) || caller.is_admin() {
                Ok(())
            } else {
                Err(CoreError::Forbidden(
                    "Cannot read another user's role".into(),
                ))
            }
        }
        Capability::AssignRole => require_admin(caller, "Admin role required"),
    }
}

fn require_identity(caller: &Caller) -> Result<(), CoreError> {
    if caller.is_authenticated() {
        Ok(())
    } else {
        Err(CoreError::Unauthorized("Authentication required".into()))
    }
}

fn require_admin(caller: &Caller, message: &str) -> Result<(), CoreError> {
    require_identity(caller)?;
    if caller.is_admin() {
        Ok(())
    } else {
        Err(CoreError::Forbidden(message.to_string()))
    }
}
