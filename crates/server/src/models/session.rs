//! Session-related types for authentication.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use lunchbox_core::{ColleagueId, ColleagueName, Role};

use super::colleague::Colleague;

/// Session-stored colleague identity.
///
/// Minimal data stored in the session to identify the logged-in
/// colleague.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentColleague {
    /// Colleague's database ID.
    pub id: ColleagueId,
    /// Colleague's display name.
    pub name: ColleagueName,
    /// Colleague's permission level.
    pub role: Role,
}

impl CurrentColleague {
    /// Whether the colleague has admin access.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&Colleague> for CurrentColleague {
    fn from(colleague: &Colleague) -> Self {
        Self {
            id: colleague.id,
            name: colleague.name.clone(),
            role: colleague.role,
        }
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in colleague.
    pub const CURRENT_COLLEAGUE: &str = "current_colleague";
}
