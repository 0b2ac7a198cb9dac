//! Authentication service.
//!
//! Handles login, colleague creation, and the bootstrap admin account.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;

use lunchbox_core::{ColleagueName, Role};

use crate::db::RepositoryError;
use crate::db::colleagues::ColleagueRepository;
use crate::models::{Colleague, CurrentColleague};

/// Authentication service.
pub struct AuthService<'a> {
    colleagues: ColleagueRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            colleagues: ColleagueRepository::new(pool),
        }
    }

    /// Log a colleague in by name and password.
    ///
    /// Inputs are trimmed before matching. Admin accounts are verified
    /// against their stored argon2 hash. Regular colleagues match on
    /// name alone: the submitted password is accepted but never
    /// checked. That is the long-standing contract of this tool; see
    /// DESIGN.md before changing it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the name is unknown
    /// or unusable, or if an admin's password does not match.
    pub async fn login(&self, name: &str, password: &str) -> Result<CurrentColleague, AuthError> {
        let Ok(name) = ColleagueName::parse(name) else {
            return Err(AuthError::InvalidCredentials);
        };

        let (colleague, password_hash) = self
            .colleagues
            .find_with_hash_by_name(&name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Only admin accounts have their password verified
        if colleague.role.is_admin() {
            verify_password(password.trim(), &password_hash)?;
        }

        Ok(CurrentColleague::from(&colleague))
    }

    /// Create a colleague account, hashing the password.
    ///
    /// The password only needs to be non-empty; callers enforce that at
    /// the edge where they can re-render the form.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ColleagueAlreadyExists` if the name is taken.
    /// Returns `AuthError::PasswordHash` if hashing fails.
    pub async fn create_colleague(
        &self,
        name: &ColleagueName,
        password: &str,
        role: Role,
    ) -> Result<Colleague, AuthError> {
        let password_hash = hash_password(password)?;

        let colleague = self
            .colleagues
            .create(name, role, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::ColleagueAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(colleague)
    }
}

/// Create the bootstrap admin account if no admin exists yet.
///
/// Runs once at startup. When the colleagues table already has an
/// admin, the configured name and password are ignored entirely.
///
/// # Errors
///
/// Returns `AuthError::InvalidName` if the configured name is unusable,
/// or any error from colleague creation.
pub async fn ensure_bootstrap_admin(
    pool: &PgPool,
    name: &str,
    password: &SecretString,
) -> Result<(), AuthError> {
    let colleagues = ColleagueRepository::new(pool);

    if colleagues.admin_exists().await? {
        tracing::debug!("admin account already present, skipping bootstrap");
        return Ok(());
    }

    let name = ColleagueName::parse(name)?;
    let service = AuthService::new(pool);

    match service
        .create_colleague(&name, password.expose_secret(), Role::Admin)
        .await
    {
        Ok(admin) => {
            tracing::info!(name = %admin.name, "bootstrap admin account created");
            Ok(())
        }
        // Another instance won the startup race; the account exists
        Err(AuthError::ColleagueAlreadyExists) => Ok(()),
        Err(e) => Err(e),
    }
}

// =============================================================================
// Password Utilities
// =============================================================================

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("tuna on rye").unwrap();
        assert!(verify_password("tuna on rye", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("tuna on rye").unwrap();
        assert!(matches!(
            verify_password("ham on rye", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();
        assert_ne!(a, b);
    }
}
