//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! lunchbox-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `LUNCHBOX_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! Runs the SQL migrations from `crates/server/migrations/` and then
//! creates the tower-sessions table via the session store's own
//! migration.

use thiserror::Error;

/// Errors that can occur during migration.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run all database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection
/// fails, or a migration fails to apply.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("LUNCHBOX_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar("LUNCHBOX_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = sqlx::PgPool::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Setting up session table...");
    let store = tower_sessions_sqlx_store::PostgresStore::new(pool);
    store.migrate().await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
