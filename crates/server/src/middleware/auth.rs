//! Authentication middleware and extractors.
//!
//! Provides extractors for requiring a logged-in colleague (or a
//! logged-in admin) in route handlers.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentColleague, session_keys};

/// Extractor that requires a logged-in colleague.
///
/// If nobody is logged in, the request is redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(colleague): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", colleague.name)
/// }
/// ```
pub struct RequireAuth(pub CurrentColleague);

/// Extractor that requires a logged-in admin.
///
/// Rejects like [`RequireAuth`] when nobody is logged in, and also when
/// the logged-in colleague is not an admin. Both cases redirect to the
/// login page; the admin screens are never revealed to other roles.
pub struct RequireAdmin(pub CurrentColleague);

/// Rejection for the auth extractors.
pub enum AuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
        }
    }
}

async fn current_colleague_from_parts(parts: &Parts) -> Option<CurrentColleague> {
    // The session is placed in extensions by SessionManagerLayer
    let session = parts.extensions.get::<Session>()?;

    session
        .get::<CurrentColleague>(session_keys::CURRENT_COLLEAGUE)
        .await
        .ok()
        .flatten()
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let colleague = current_colleague_from_parts(parts)
            .await
            .ok_or(AuthRejection::RedirectToLogin)?;

        Ok(Self(colleague))
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let colleague = current_colleague_from_parts(parts)
            .await
            .ok_or(AuthRejection::RedirectToLogin)?;

        if !colleague.is_admin() {
            return Err(AuthRejection::RedirectToLogin);
        }

        Ok(Self(colleague))
    }
}

/// Extractor that optionally gets the current colleague.
///
/// Unlike `RequireAuth`, this does not reject the request if nobody is
/// logged in.
pub struct OptionalAuth(pub Option<CurrentColleague>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(current_colleague_from_parts(parts).await))
    }
}

/// Helper to set the current colleague in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_colleague(
    session: &Session,
    colleague: &CurrentColleague,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_COLLEAGUE, colleague)
        .await
}

/// Helper to clear the session on logout.
///
/// The whole session is flushed rather than just the one key, so
/// nothing stale survives a logout.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_colleague(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}
