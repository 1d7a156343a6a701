//! Well-known role names and the resolved [`Role`] of a caller.
//!
//! Identities without a stored role are plain users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    /// Lenient conversion for stored labels: anything unrecognised is a user.
    pub fn from_label(label: Option<&str>) -> Role {
        match label {
            Some(ROLE_ADMIN) => Role::Admin,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_USER => Ok(Role::User),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_USER}, {ROLE_ADMIN}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_label_defaults_to_user() {
        assert_eq!(Role::from_label(None), Role::User);
        assert_eq!(Role::from_label(Some("moderator")), Role::User);
        assert_eq!(Role::from_label(Some("admin")), Role::Admin);
    }

    #[test]
    fn strict_parse_rejects_unknown_roles() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("root".parse::<Role>().is_err());
    }
}
