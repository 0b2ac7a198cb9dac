//! Sandwich catalog repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lunchbox_core::{Money, SandwichId};

use super::RepositoryError;
use crate::models::Sandwich;

/// Internal row type for sandwich queries.
#[derive(Debug, sqlx::FromRow)]
struct SandwichRow {
    sandwich_id: i32,
    sandwich_name: String,
    price: Money,
    is_available: bool,
    created_at: DateTime<Utc>,
}

impl From<SandwichRow> for Sandwich {
    fn from(row: SandwichRow) -> Self {
        Self {
            id: SandwichId::new(row.sandwich_id),
            name: row.sandwich_name,
            price: row.price,
            is_available: row.is_available,
            created_at: row.created_at,
        }
    }
}

/// Repository for sandwich catalog operations.
pub struct SandwichRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SandwichRepository<'a> {
    /// Create a new sandwich repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the sandwiches currently on offer, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_available(&self) -> Result<Vec<Sandwich>, RepositoryError> {
        let rows = sqlx::query_as::<_, SandwichRow>(
            r"
            SELECT sandwich_id, sandwich_name, price, is_available, created_at
            FROM sandwiches
            WHERE is_available = TRUE
            ORDER BY sandwich_name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Sandwich::from).collect())
    }

    /// Add a sandwich to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, name: &str, price: Money) -> Result<Sandwich, RepositoryError> {
        let row = sqlx::query_as::<_, SandwichRow>(
            r"
            INSERT INTO sandwiches (sandwich_name, price)
            VALUES ($1, $2)
            RETURNING sandwich_id, sandwich_name, price, is_available, created_at
            ",
        )
        .bind(name)
        .bind(price)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("sandwich name already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(Sandwich::from(row))
    }
}
