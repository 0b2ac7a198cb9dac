//! Order placement and aggregation logic.
//!
//! The quirky edges of the ordering flow (forgiving quantity parsing,
//! name-based selection lookup, per-colleague grouping) live here as
//! plain functions over already-fetched data so they stay unit
//! testable. The repository does the I/O.

use thiserror::Error;

use lunchbox_core::{ColleagueId, ColleagueName, Money, OrderId, SandwichId};

use crate::db::{OrderRepository, RepositoryError};
use crate::models::{Colleague, OrderLine, Sandwich};

/// Quantity used when the submitted value is missing or unusable.
const DEFAULT_QUANTITY: i32 = 1;

/// Errors that can occur when placing an order.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// The chosen colleague or sandwich is not in the current lists.
    #[error("invalid colleague or sandwich selection")]
    UnknownSelection,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Parse a submitted quantity.
///
/// Missing, non-numeric, and below-1 values all silently become 1.
#[must_use]
pub fn parse_quantity(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|qty| *qty >= 1)
        .unwrap_or(DEFAULT_QUANTITY)
}

/// Find a colleague by exact name in an already-fetched list.
#[must_use]
pub fn resolve_colleague(colleagues: &[Colleague], name: &str) -> Option<ColleagueId> {
    colleagues
        .iter()
        .find(|c| c.name.as_str() == name)
        .map(|c| c.id)
}

/// Find a sandwich by exact name in an already-fetched list.
#[must_use]
pub fn resolve_sandwich(sandwiches: &[Sandwich], name: &str) -> Option<SandwichId> {
    sandwiches.iter().find(|s| s.name == name).map(|s| s.id)
}

/// Place an order: resolve both names against the given lists, then
/// record the order with its single item.
///
/// # Errors
///
/// Returns `PlaceOrderError::UnknownSelection` if either name does not
/// resolve, `PlaceOrderError::Repository` if the insert fails.
pub async fn place_order(
    orders: &OrderRepository<'_>,
    colleagues: &[Colleague],
    sandwiches: &[Sandwich],
    colleague_name: &str,
    sandwich_name: &str,
    quantity: i32,
) -> Result<OrderId, PlaceOrderError> {
    let colleague_id =
        resolve_colleague(colleagues, colleague_name).ok_or(PlaceOrderError::UnknownSelection)?;
    let sandwich_id =
        resolve_sandwich(sandwiches, sandwich_name).ok_or(PlaceOrderError::UnknownSelection)?;

    let order_id = orders
        .create_with_item(colleague_id, sandwich_id, quantity)
        .await?;

    Ok(order_id)
}

/// One colleague's orders with their running total.
#[derive(Debug, Clone)]
pub struct ColleagueOrders {
    /// Who ordered.
    pub colleague_name: ColleagueName,
    /// Sum of line totals across their items.
    pub total_price: Money,
    /// Their lines, in query order.
    pub items: Vec<OrderLineSummary>,
}

/// A grouped order line: sandwich, quantity, and line total.
#[derive(Debug, Clone)]
pub struct OrderLineSummary {
    /// Catalog name of the sandwich.
    pub sandwich_name: String,
    /// How many.
    pub quantity: i32,
    /// Unit price times quantity.
    pub line_price: Money,
}

/// Group order lines per colleague, preserving first-encounter order.
///
/// The repository returns lines sorted by colleague name, so groups
/// come out alphabetical; this function only relies on equal names
/// being adjacent or not at all, never on the sort itself.
#[must_use]
pub fn group_by_colleague(lines: &[OrderLine]) -> Vec<ColleagueOrders> {
    let mut groups: Vec<ColleagueOrders> = Vec::new();

    for line in lines {
        let line_price = line.unit_price.line_total(line.quantity);

        let idx = groups
            .iter()
            .position(|g| g.colleague_name == line.colleague_name)
            .unwrap_or_else(|| {
                groups.push(ColleagueOrders {
                    colleague_name: line.colleague_name.clone(),
                    total_price: Money::ZERO,
                    items: Vec::new(),
                });
                groups.len() - 1
            });

        if let Some(group) = groups.get_mut(idx) {
            group.total_price += line_price;
            group.items.push(OrderLineSummary {
                sandwich_name: line.sandwich_name.clone(),
                quantity: line.quantity,
                line_price,
            });
        }
    }

    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use lunchbox_core::Role;

    use super::*;

    fn colleague(id: i32, name: &str) -> Colleague {
        Colleague {
            id: ColleagueId::new(id),
            name: ColleagueName::parse(name).unwrap(),
            role: Role::Regular,
            created_at: Utc::now(),
        }
    }

    fn sandwich(id: i32, name: &str, price: &str) -> Sandwich {
        Sandwich {
            id: SandwichId::new(id),
            name: name.to_string(),
            price: Money::parse(price).unwrap(),
            is_available: true,
            created_at: Utc::now(),
        }
    }

    fn line(colleague_name: &str, sandwich_name: &str, price: &str, quantity: i32) -> OrderLine {
        OrderLine {
            colleague_name: ColleagueName::parse(colleague_name).unwrap(),
            sandwich_name: sandwich_name.to_string(),
            unit_price: Money::parse(price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_parse_quantity_accepts_numbers() {
        assert_eq!(parse_quantity(Some("3")), 3);
        assert_eq!(parse_quantity(Some(" 2 ")), 2);
        assert_eq!(parse_quantity(Some("1")), 1);
    }

    #[test]
    fn test_parse_quantity_falls_back_to_one() {
        assert_eq!(parse_quantity(None), 1);
        assert_eq!(parse_quantity(Some("")), 1);
        assert_eq!(parse_quantity(Some("two")), 1);
        assert_eq!(parse_quantity(Some("2.5")), 1);
    }

    #[test]
    fn test_parse_quantity_rejects_zero_and_negative() {
        assert_eq!(parse_quantity(Some("0")), 1);
        assert_eq!(parse_quantity(Some("-4")), 1);
    }

    #[test]
    fn test_resolve_colleague_exact_match() {
        let colleagues = vec![colleague(1, "Ada"), colleague(2, "Bob")];

        assert_eq!(
            resolve_colleague(&colleagues, "Bob"),
            Some(ColleagueId::new(2))
        );
        assert_eq!(resolve_colleague(&colleagues, "bob"), None);
        assert_eq!(resolve_colleague(&colleagues, "Carol"), None);
    }

    #[test]
    fn test_resolve_sandwich_exact_match() {
        let sandwiches = vec![sandwich(1, "Ham", "3.50"), sandwich(2, "Cheese", "3.00")];

        assert_eq!(
            resolve_sandwich(&sandwiches, "Cheese"),
            Some(SandwichId::new(2))
        );
        assert_eq!(resolve_sandwich(&sandwiches, "Tuna"), None);
    }

    #[test]
    fn test_group_by_colleague_empty() {
        assert!(group_by_colleague(&[]).is_empty());
    }

    #[test]
    fn test_group_by_colleague_totals_and_order() {
        let lines = vec![
            line("Ada", "Cheese", "3.00", 1),
            line("Ada", "Ham", "3.50", 2),
            line("Bob", "Ham", "3.50", 1),
        ];

        let groups = group_by_colleague(&lines);

        assert_eq!(groups.len(), 2);

        let ada = groups.first().unwrap();
        assert_eq!(ada.colleague_name.as_str(), "Ada");
        assert_eq!(ada.items.len(), 2);
        assert_eq!(ada.total_price.to_string(), "10.00");

        let bob = groups.get(1).unwrap();
        assert_eq!(bob.colleague_name.as_str(), "Bob");
        assert_eq!(bob.items.len(), 1);
        assert_eq!(bob.total_price.to_string(), "3.50");
    }

    #[test]
    fn test_group_by_colleague_line_prices() {
        let lines = vec![line("Ada", "Ham", "3.50", 3)];

        let groups = group_by_colleague(&lines);
        let item = groups.first().and_then(|g| g.items.first()).unwrap();

        assert_eq!(item.line_price.to_string(), "10.50");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_group_by_colleague_keeps_first_encounter_order() {
        // Not sorted: Bob appears first, then Ada, then Bob again
        let lines = vec![
            line("Bob", "Ham", "3.50", 1),
            line("Ada", "Cheese", "3.00", 1),
            line("Bob", "Cheese", "3.00", 1),
        ];

        let groups = group_by_colleague(&lines);

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups.first().unwrap().colleague_name.as_str(),
            "Bob"
        );
        assert_eq!(groups.first().unwrap().items.len(), 2);
        assert_eq!(groups.first().unwrap().total_price.to_string(), "6.50");
    }
}
