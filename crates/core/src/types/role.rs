//! Application roles.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a role string is not recognized.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown role: {0}")]
pub struct RoleError(pub String);

/// Application role attached to a user profile.
///
/// The role decides which surface a session may use: `user` gets the
/// storefront, `supplier` additionally gets the supplier portal, and
/// `admin` gets everything. Roles are stored lowercase in
/// `profiles.role` and read once at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Supplier,
}

impl Role {
    /// String form as stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Supplier => "supplier",
        }
    }

    /// Whether this role may use the supplier portal.
    #[must_use]
    pub const fn can_manage_catalog(&self) -> bool {
        matches!(self, Self::Admin | Self::Supplier)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "supplier" => Ok(Self::Supplier),
            other => Err(RoleError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for role in [Role::Admin, Role::User, Role::Supplier] {
            assert_eq!(role.as_str().parse::<Role>().expect("parses"), role);
        }
    }

    #[test]
    fn test_unknown_rejected() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::Supplier).expect("serialize"),
            "\"supplier\""
        );
        let role: Role = serde_json::from_str("\"user\"").expect("deserialize");
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_portal_access() {
        assert!(Role::Supplier.can_manage_catalog());
        assert!(Role::Admin.can_manage_catalog());
        assert!(!Role::User.can_manage_catalog());
    }
}
