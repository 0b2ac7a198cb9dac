//! Order repository: the shared cart and its aggregations.

use sqlx::PgPool;

use lunchbox_core::{ColleagueId, ColleagueName, Money, OrderId, SandwichId};

use super::RepositoryError;
use crate::models::{OrderLine, SandwichTotal};

/// Internal row type for the by-sandwich aggregation.
#[derive(Debug, sqlx::FromRow)]
struct SandwichTotalRow {
    sandwich_name: String,
    total_quantity: i64,
}

impl From<SandwichTotalRow> for SandwichTotal {
    fn from(row: SandwichTotalRow) -> Self {
        Self {
            sandwich_name: row.sandwich_name,
            total_quantity: row.total_quantity,
        }
    }
}

/// Internal row type for the joined order-lines query.
#[derive(Debug, sqlx::FromRow)]
struct OrderLineRow {
    colleague_name: String,
    sandwich_name: String,
    price: Money,
    quantity: i32,
}

impl TryFrom<OrderLineRow> for OrderLine {
    type Error = RepositoryError;

    fn try_from(row: OrderLineRow) -> Result<Self, Self::Error> {
        let colleague_name = ColleagueName::parse(&row.colleague_name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid colleague name in database: {e}"))
        })?;

        Ok(Self {
            colleague_name,
            sandwich_name: row.sandwich_name,
            unit_price: row.price,
            quantity: row.quantity,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record an order with its single line item.
    ///
    /// The order row and its item are inserted in one transaction so a
    /// failure cannot leave an empty order behind.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn create_with_item(
        &self,
        colleague_id: ColleagueId,
        sandwich_id: SandwichId,
        quantity: i32,
    ) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order_id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO orders (colleague_id)
            VALUES ($1)
            RETURNING order_id
            ",
        )
        .bind(colleague_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r"
            INSERT INTO order_items (order_id, sandwich_id, quantity)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(order_id)
        .bind(sandwich_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }

    /// Total quantity per sandwich across the whole cart, ordered by
    /// sandwich name. Sandwiches nobody ordered are absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn totals_by_sandwich(&self) -> Result<Vec<SandwichTotal>, RepositoryError> {
        let rows = sqlx::query_as::<_, SandwichTotalRow>(
            r"
            SELECT s.sandwich_name, SUM(oi.quantity) AS total_quantity
            FROM order_items oi
            JOIN sandwiches s ON oi.sandwich_id = s.sandwich_id
            GROUP BY s.sandwich_name
            ORDER BY s.sandwich_name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(SandwichTotal::from).collect())
    }

    /// Every order line in the cart joined with colleague and sandwich
    /// data, ordered by colleague name then sandwich name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored name is invalid.
    pub async fn order_lines(&self) -> Result<Vec<OrderLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r"
            SELECT c.name AS colleague_name, s.sandwich_name, s.price, oi.quantity
            FROM order_items oi
            JOIN orders o ON oi.order_id = o.order_id
            JOIN colleagues c ON o.colleague_id = c.colleague_id
            JOIN sandwiches s ON oi.sandwich_id = s.sandwich_id
            ORDER BY c.name, s.sandwich_name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderLine::try_from).collect()
    }

    /// Delete every order and order item.
    ///
    /// Items and orders are removed in one transaction; returns the
    /// number of deleted orders and items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn clear_all(&self) -> Result<(u64, u64), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let items = sqlx::query("DELETE FROM order_items")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let orders = sqlx::query("DELETE FROM orders")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok((orders, items))
    }
}
