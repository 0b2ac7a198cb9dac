//! Colleague repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use lunchbox_core::{ColleagueId, ColleagueName, Role};

use super::RepositoryError;
use crate::models::Colleague;

/// Internal row type for colleague queries.
#[derive(Debug, sqlx::FromRow)]
struct ColleagueRow {
    colleague_id: i32,
    name: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ColleagueRow> for Colleague {
    type Error = RepositoryError;

    fn try_from(row: ColleagueRow) -> Result<Self, Self::Error> {
        let name = ColleagueName::parse(&row.name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid colleague name in database: {e}"))
        })?;

        Ok(Self {
            id: ColleagueId::new(row.colleague_id),
            name,
            role: Role::from_is_admin(row.is_admin),
            created_at: row.created_at,
        })
    }
}

/// Internal row type for login lookups, carrying the password hash.
#[derive(Debug, sqlx::FromRow)]
struct ColleagueAuthRow {
    colleague_id: i32,
    name: String,
    is_admin: bool,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Repository for colleague database operations.
pub struct ColleagueRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ColleagueRepository<'a> {
    /// Create a new colleague repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all colleagues, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored name is invalid.
    pub async fn list_all(&self) -> Result<Vec<Colleague>, RepositoryError> {
        let rows = sqlx::query_as::<_, ColleagueRow>(
            r"
            SELECT colleague_id, name, is_admin, created_at
            FROM colleagues
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Colleague::try_from).collect()
    }

    /// Look up a colleague by name, returning the stored password hash
    /// alongside the domain model.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored name is invalid.
    pub async fn find_with_hash_by_name(
        &self,
        name: &ColleagueName,
    ) -> Result<Option<(Colleague, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, ColleagueAuthRow>(
            r"
            SELECT colleague_id, name, is_admin, password_hash, created_at
            FROM colleagues
            WHERE name = $1
            ",
        )
        .bind(name.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => {
                let name = ColleagueName::parse(&r.name).map_err(|e| {
                    RepositoryError::DataCorruption(format!(
                        "invalid colleague name in database: {e}"
                    ))
                })?;

                Ok(Some((
                    Colleague {
                        id: ColleagueId::new(r.colleague_id),
                        name,
                        role: Role::from_is_admin(r.is_admin),
                        created_at: r.created_at,
                    },
                    r.password_hash,
                )))
            }
            None => Ok(None),
        }
    }

    /// Whether any admin account exists.
    ///
    /// Used at startup to decide if the bootstrap admin must be created.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn admin_exists(&self) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS (SELECT 1 FROM colleagues WHERE is_admin)
            ",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    /// Create a new colleague.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &ColleagueName,
        role: Role,
        password_hash: &str,
    ) -> Result<Colleague, RepositoryError> {
        let row = sqlx::query_as::<_, ColleagueRow>(
            r"
            INSERT INTO colleagues (name, is_admin, password_hash)
            VALUES ($1, $2, $3)
            RETURNING colleague_id, name, is_admin, created_at
            ",
        )
        .bind(name.as_str())
        .bind(role.is_admin())
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("name already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Colleague::try_from(row)
    }
}
