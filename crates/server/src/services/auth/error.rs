//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid colleague name.
    #[error("invalid name: {0}")]
    InvalidName(#[from] lunchbox_core::NameError),

    /// Invalid credentials (unknown name or wrong admin password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A colleague with this name already exists.
    #[error("colleague already exists")]
    ColleagueAlreadyExists,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
