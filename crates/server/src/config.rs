//! Configuration for the lunchbox server.
//!
//! All settings come from environment variables (and a local `.env`
//! file during development). Variables specific to this app use the
//! `LUNCHBOX_` prefix; `DATABASE_URL` works as a fallback so managed
//! Postgres attachments need no renaming.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Minimum length for the bootstrap admin password.
///
/// The bootstrap credential comes from deployment configuration, not a
/// signup form, so a short value is a deployment mistake.
const MIN_BOOTSTRAP_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection string.
    pub database_url: SecretString,
    /// Address to bind (default 127.0.0.1).
    pub host: IpAddr,
    /// Port to bind (default 8080).
    pub port: u16,
    /// Public base URL, used to decide whether session cookies are
    /// marked Secure (default `http://localhost:8080`).
    pub base_url: String,
    /// Name for the bootstrap admin account (default "admin").
    pub bootstrap_admin_name: String,
    /// Password for the bootstrap admin account. Only used when the
    /// database has no admin yet.
    pub bootstrap_admin_password: SecretString,
    /// Sentry DSN for error tracking (optional).
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (optional).
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0).
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate (0.0 to 1.0).
    pub sentry_traces_sample_rate: f32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// invalid, or if the bootstrap admin password is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("LUNCHBOX_DATABASE_URL")?;
        let host = get_env_or_default("LUNCHBOX_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUNCHBOX_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LUNCHBOX_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUNCHBOX_PORT".to_string(), e.to_string()))?;

        let base_url = get_env_or_default("LUNCHBOX_BASE_URL", "http://localhost:8080");
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("LUNCHBOX_BASE_URL".to_string(), e.to_string())
        })?;

        let bootstrap_admin_name = get_env_or_default("LUNCHBOX_ADMIN_NAME", "admin");
        let bootstrap_admin_password = get_required_secret("LUNCHBOX_ADMIN_PASSWORD")?;
        validate_bootstrap_password(&bootstrap_admin_password, "LUNCHBOX_ADMIN_PASSWORD")?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            bootstrap_admin_name,
            bootstrap_admin_password,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    // Try primary key first (LUNCHBOX_DATABASE_URL)
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    // Fallback to generic DATABASE_URL (set by managed Postgres attach)
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn validate_bootstrap_password(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    if secret.expose_secret().len() < MIN_BOOTSTRAP_PASSWORD_LENGTH {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be at least {MIN_BOOTSTRAP_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}
