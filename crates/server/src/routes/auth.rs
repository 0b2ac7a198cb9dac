//! Authentication route handlers.
//!
//! Handles login and logout backed by the colleagues table. Regular
//! colleagues sign in with just their name; admin accounts also have
//! their password verified.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAuth, clear_current_colleague, set_current_colleague};
use crate::routes::flash::MessageQuery;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub notice: Option<&'static str>,
    pub error: Option<&'static str>,
    pub logged_in: bool,
    pub is_admin: bool,
}

// =============================================================================
// Routes
// =============================================================================

/// Send visitors to the order page or the login page.
#[instrument(skip_all)]
pub async fn home(OptionalAuth(colleague): OptionalAuth) -> Redirect {
    match colleague {
        Some(_) => Redirect::to("/order"),
        None => Redirect::to("/login"),
    }
}

/// Display the login page.
#[instrument(skip_all)]
pub async fn login_page(
    OptionalAuth(colleague): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let (notice, error) = query.resolve();
    LoginTemplate {
        notice,
        error,
        logged_in: colleague.is_some(),
        is_admin: colleague.as_ref().is_some_and(|c| c.is_admin()),
    }
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.name, &form.password).await {
        Ok(current) => {
            if let Err(e) = set_current_colleague(&session, &current).await {
                tracing::error!("Failed to set session: {}", e);
                return Redirect::to("/login?error=session").into_response();
            }

            set_sentry_user(&current.id, current.name.as_str());
            add_breadcrumb(
                "auth",
                "Logged in",
                Some(&[("colleague", current.name.as_str())]),
            );
            tracing::info!(colleague_id = %current.id, "Login successful");

            let notice = if current.is_admin() {
                "logged_in_admin"
            } else {
                "logged_in"
            };
            Redirect::to(&format!("/order?notice={notice}")).into_response()
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Login failed for submitted name");
            Redirect::to("/login?error=invalid_credentials").into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Log out and clear the session.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_colleague(&session).await?;
    clear_sentry_user();
    Ok(Redirect::to("/login?notice=logged_out"))
}
