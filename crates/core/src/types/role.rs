//! Colleague permission levels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Permission level of a colleague account.
///
/// Stored in `PostgreSQL` as the `is_admin` boolean on the colleague
/// row; the enum keeps role checks explicit in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages the catalog, the colleague roster, and the shared cart.
    Admin,
    /// Signs in and places orders.
    Regular,
}

impl Role {
    /// Map an `is_admin` column value to a role.
    #[must_use]
    pub const fn from_is_admin(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::Regular }
    }

    /// Whether this role grants admin access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Regular => write!(f, "regular"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_is_admin() {
        assert_eq!(Role::from_is_admin(true), Role::Admin);
        assert_eq!(Role::from_is_admin(false), Role::Regular);
    }

    #[test]
    fn test_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Regular.is_admin());
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Regular.to_string(), "regular");
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"regular\"").unwrap(),
            Role::Regular
        );
    }
}
