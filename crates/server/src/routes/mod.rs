//! HTTP route handlers for the lunchbox server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /          - Redirect to /order or /login
//! GET  /login     - Login page
//! POST /login     - Login action
//! GET  /logout    - Logout action
//!
//! # Orders (requires auth)
//! GET  /order     - Order page with catalog and kitchen totals
//! POST /order     - Place an order
//! GET  /details   - Per-colleague order breakdown
//!
//! # Admin (requires admin)
//! GET  /admin     - Admin page (roster, catalog, shared cart)
//! POST /admin     - Admin actions (add colleague/sandwich, clear cart)
//! ```

pub mod admin;
pub mod auth;
pub mod details;
pub mod flash;
pub mod order;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::home))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/order", get(order::order_page).post(order::place_order))
        .route("/details", get(details::details_page))
        .route("/admin", get(admin::admin_page).post(admin::admin_action))
}
