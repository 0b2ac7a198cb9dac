//! Order route handlers: the shared cart everyone orders into.
//!
//! The order page shows the catalog alongside the kitchen totals so a
//! colleague can see what the office has already asked for. Admins get
//! an extra selector to place orders on someone else's behalf.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::db::{ColleagueRepository, OrderRepository, SandwichRepository};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Colleague, Sandwich, SandwichTotal};
use crate::routes::flash::MessageQuery;
use crate::services::orders::{self, PlaceOrderError};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Order form data.
///
/// Everything is optional; missing or malformed fields fall back the
/// same way a blank form would (quantity to 1, names to no match).
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub colleague_name: Option<String>,
    pub sandwich_name: Option<String>,
    pub quantity: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Order page template.
#[derive(Template, WebTemplate)]
#[template(path = "order.html")]
pub struct OrderTemplate {
    pub notice: Option<&'static str>,
    pub error: Option<&'static str>,
    pub logged_in: bool,
    pub is_admin: bool,
    pub colleague_name: String,
    pub colleagues: Vec<Colleague>,
    pub sandwiches: Vec<Sandwich>,
    pub totals: Vec<SandwichTotal>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the order page with the catalog and running kitchen totals.
#[instrument(skip_all)]
pub async fn order_page(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<OrderTemplate> {
    let (notice, error) = query.resolve();

    // The on-behalf-of selector is only rendered for admins
    let colleagues = if current.is_admin() {
        ColleagueRepository::new(state.pool()).list_all().await?
    } else {
        Vec::new()
    };
    let sandwiches = SandwichRepository::new(state.pool())
        .list_available()
        .await?;
    let totals = OrderRepository::new(state.pool())
        .totals_by_sandwich()
        .await?;

    Ok(OrderTemplate {
        notice,
        error,
        logged_in: true,
        is_admin: current.is_admin(),
        colleague_name: current.name.to_string(),
        colleagues,
        sandwiches,
        totals,
    })
}

/// Handle order form submission.
#[instrument(skip_all)]
pub async fn place_order(
    State(state): State<AppState>,
    RequireAuth(current): RequireAuth,
    Form(form): Form<OrderForm>,
) -> Result<Response> {
    let colleagues = ColleagueRepository::new(state.pool()).list_all().await?;
    let sandwiches = SandwichRepository::new(state.pool())
        .list_available()
        .await?;

    // Admins may order on behalf of anyone; everyone else orders for
    // themselves no matter what the form says
    let colleague_name = if current.is_admin() {
        form.colleague_name.unwrap_or_default()
    } else {
        current.name.to_string()
    };
    let sandwich_name = form.sandwich_name.unwrap_or_default();
    let quantity = orders::parse_quantity(form.quantity.as_deref());

    let repo = OrderRepository::new(state.pool());
    match orders::place_order(
        &repo,
        &colleagues,
        &sandwiches,
        &colleague_name,
        &sandwich_name,
        quantity,
    )
    .await
    {
        Ok(order_id) => {
            add_breadcrumb(
                "order",
                "Placed order",
                Some(&[("sandwich", sandwich_name.as_str())]),
            );
            tracing::info!(order_id = %order_id, quantity, "Order placed");
            Ok(Redirect::to("/order?notice=order_placed").into_response())
        }
        Err(PlaceOrderError::UnknownSelection) => {
            tracing::warn!("Order submitted with unknown colleague or sandwich");
            Ok(Redirect::to("/order?error=unknown_selection").into_response())
        }
        Err(PlaceOrderError::Repository(e)) => Err(e.into()),
    }
}
