//! Admin route handlers: roster, catalog, and shared-cart management.
//!
//! A single page hosts three forms (add colleague, add sandwich, clear
//! cart). All of them post back to `/admin` with a hidden `action`
//! field picking the branch.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use lunchbox_core::{ColleagueName, Money, Role};

use crate::db::{ColleagueRepository, OrderRepository, RepositoryError, SandwichRepository};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{Colleague, CurrentColleague, Sandwich};
use crate::routes::flash::MessageQuery;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Admin action form data.
///
/// Every field except `action` is optional; each branch validates the
/// fields it needs and redirects with a flash code on bad input.
#[derive(Debug, Deserialize)]
pub struct AdminActionForm {
    pub action: String,
    pub colleague_name: Option<String>,
    pub colleague_password: Option<String>,
    pub colleague_is_admin: Option<String>,
    pub sandwich_name: Option<String>,
    pub sandwich_price: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Admin page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub notice: Option<&'static str>,
    pub error: Option<&'static str>,
    pub logged_in: bool,
    pub is_admin: bool,
    pub colleagues: Vec<Colleague>,
    pub sandwiches: Vec<Sandwich>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the admin page with the roster and the catalog.
#[instrument(skip_all)]
pub async fn admin_page(
    State(state): State<AppState>,
    RequireAdmin(_current): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> Result<AdminTemplate> {
    let (notice, error) = query.resolve();

    let colleagues = ColleagueRepository::new(state.pool()).list_all().await?;
    let sandwiches = SandwichRepository::new(state.pool())
        .list_available()
        .await?;

    Ok(AdminTemplate {
        notice,
        error,
        logged_in: true,
        is_admin: true,
        colleagues,
        sandwiches,
    })
}

/// Handle admin form submissions.
#[instrument(skip_all)]
pub async fn admin_action(
    State(state): State<AppState>,
    RequireAdmin(current): RequireAdmin,
    Form(form): Form<AdminActionForm>,
) -> Result<Response> {
    match form.action.as_str() {
        "add_colleague" => add_colleague(&state, &form).await,
        "add_sandwich" => add_sandwich(&state, &form).await,
        "clear_cart" => clear_cart(&state, &current).await,
        other => {
            tracing::warn!("Unknown admin action: {}", other);
            Ok(Redirect::to("/admin?error=unknown_action").into_response())
        }
    }
}

// =============================================================================
// Action Branches
// =============================================================================

async fn add_colleague(state: &AppState, form: &AdminActionForm) -> Result<Response> {
    let name = form.colleague_name.as_deref().unwrap_or("").trim();
    let password = form.colleague_password.as_deref().unwrap_or("").trim();
    let is_admin = form.colleague_is_admin.as_deref() == Some("on");

    if name.is_empty() || password.is_empty() {
        return Ok(Redirect::to("/admin?error=missing_fields").into_response());
    }

    let Ok(parsed) = ColleagueName::parse(name) else {
        return Ok(Redirect::to("/admin?error=invalid_name").into_response());
    };

    let auth = AuthService::new(state.pool());
    match auth
        .create_colleague(&parsed, password, Role::from_is_admin(is_admin))
        .await
    {
        Ok(colleague) => {
            add_breadcrumb(
                "admin",
                "Added colleague",
                Some(&[("colleague", parsed.as_str())]),
            );
            tracing::info!(colleague_id = %colleague.id, is_admin, "Colleague added");
            Ok(Redirect::to("/admin?notice=colleague_added").into_response())
        }
        Err(AuthError::ColleagueAlreadyExists) => {
            Ok(Redirect::to("/admin?error=duplicate_name").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn add_sandwich(state: &AppState, form: &AdminActionForm) -> Result<Response> {
    let name = form.sandwich_name.as_deref().unwrap_or("").trim();
    let raw_price = form.sandwich_price.as_deref().unwrap_or("").trim();

    if name.is_empty() || raw_price.is_empty() {
        return Ok(Redirect::to("/admin?error=missing_fields").into_response());
    }

    let Ok(price) = Money::parse(raw_price) else {
        return Ok(Redirect::to("/admin?error=invalid_price").into_response());
    };

    match SandwichRepository::new(state.pool()).create(name, price).await {
        Ok(sandwich) => {
            add_breadcrumb("admin", "Added sandwich", Some(&[("sandwich", name)]));
            tracing::info!(sandwich_id = %sandwich.id, "Sandwich added");
            Ok(Redirect::to("/admin?notice=sandwich_added").into_response())
        }
        Err(RepositoryError::Conflict(_)) => {
            Ok(Redirect::to("/admin?error=duplicate_name").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

async fn clear_cart(state: &AppState, current: &CurrentColleague) -> Result<Response> {
    let (orders_deleted, items_deleted) = OrderRepository::new(state.pool()).clear_all().await?;

    add_breadcrumb("admin", "Cleared all orders", None);
    tracing::info!(
        admin = %current.name,
        orders_deleted,
        items_deleted,
        "Shared cart cleared"
    );
    Ok(Redirect::to("/admin?notice=cart_cleared").into_response())
}
