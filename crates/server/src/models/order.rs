//! Order aggregation models.
//!
//! The cart is never shown order-by-order; the app works with two
//! read shapes: quantity totals per sandwich (for the kitchen) and
//! joined order lines (folded per colleague for settling up).

use serde::{Deserialize, Serialize};

use lunchbox_core::{ColleagueName, Money};

/// Total quantity ordered for one sandwich across the whole cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandwichTotal {
    /// Catalog name of the sandwich.
    pub sandwich_name: String,
    /// Sum of quantities over every order item.
    pub total_quantity: i64,
}

/// One order item joined with its colleague and sandwich.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Who ordered.
    pub colleague_name: ColleagueName,
    /// What they ordered.
    pub sandwich_name: String,
    /// Unit price at query time.
    pub unit_price: Money,
    /// How many.
    pub quantity: i32,
}
