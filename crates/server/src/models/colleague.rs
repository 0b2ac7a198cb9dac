//! Colleague account model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lunchbox_core::{ColleagueId, ColleagueName, Role};

/// A colleague account.
///
/// The stored password hash is not part of the model; login code
/// receives it separately from the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colleague {
    /// Database ID.
    pub id: ColleagueId,
    /// Unique display name, also the login identifier.
    pub name: ColleagueName,
    /// Permission level.
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
