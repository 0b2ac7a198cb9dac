//! Sandwich catalog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lunchbox_core::{Money, SandwichId};

/// A sandwich the kitchen offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sandwich {
    /// Database ID.
    pub id: SandwichId,
    /// Unique catalog name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Whether the sandwich can currently be ordered.
    pub is_available: bool,
    /// When the catalog entry was created.
    pub created_at: DateTime<Utc>,
}
