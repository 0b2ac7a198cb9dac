//! Colleague account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a regular colleague
//! lunchbox-cli colleague add --name "Jo" --password "ham-on-rye"
//!
//! # Create an admin (password from the environment)
//! LUNCHBOX_COLLEAGUE_PASSWORD=... lunchbox-cli colleague add --name "Sam" --admin
//! ```
//!
//! # Environment Variables
//!
//! - `LUNCHBOX_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//! - `LUNCHBOX_COLLEAGUE_PASSWORD` - Password when `--password` is not given

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

use lunchbox_core::{ColleagueName, Role};
use lunchbox_server::services::{AuthError, AuthService};

/// Errors that can occur during colleague operations.
#[derive(Debug, Error)]
pub enum ColleagueError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// No password given and none in the environment.
    #[error("Missing password: pass --password or set LUNCHBOX_COLLEAGUE_PASSWORD")]
    MissingPassword,

    /// Password is empty.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// Invalid colleague name.
    #[error("Invalid name: {0}")]
    InvalidName(#[from] lunchbox_core::NameError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Account creation error.
    #[error("Account error: {0}")]
    Auth(#[from] AuthError),
}

/// Create a new colleague account.
///
/// # Arguments
///
/// * `name` - Colleague's display name
/// * `password` - Password, or `None` to read `LUNCHBOX_COLLEAGUE_PASSWORD`
/// * `is_admin` - Whether to grant admin access
///
/// # Returns
///
/// The ID of the created colleague.
///
/// # Errors
///
/// Returns an error if the name or password is unusable, the database
/// is unreachable, or the name is already taken.
pub async fn add(
    name: &str,
    password: Option<&str>,
    is_admin: bool,
) -> Result<i32, ColleagueError> {
    dotenvy::dotenv().ok();

    let name = ColleagueName::parse(name)?;

    let password = match password {
        Some(p) => SecretString::from(p.to_owned()),
        None => std::env::var("LUNCHBOX_COLLEAGUE_PASSWORD")
            .map(SecretString::from)
            .map_err(|_| ColleagueError::MissingPassword)?,
    };
    if password.expose_secret().trim().is_empty() {
        return Err(ColleagueError::EmptyPassword);
    }

    let database_url = std::env::var("LUNCHBOX_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| ColleagueError::MissingEnvVar("LUNCHBOX_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Creating colleague: {} (admin: {})", name, is_admin);

    let service = AuthService::new(&pool);
    let colleague = service
        .create_colleague(
            &name,
            password.expose_secret().trim(),
            Role::from_is_admin(is_admin),
        )
        .await?;

    tracing::info!(
        "Colleague created successfully! ID: {}, Name: {}, Role: {}",
        colleague.id,
        colleague.name,
        colleague.role
    );

    Ok(colleague.id.as_i32())
}
