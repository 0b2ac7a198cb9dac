//! Business logic services for the lunchbox server.
//!
//! # Services
//!
//! - `auth` - Login, colleague creation, and the bootstrap admin
//! - `orders` - Order placement and per-colleague grouping

pub mod auth;
pub mod orders;

pub use auth::{AuthError, AuthService, ensure_bootstrap_admin};
pub use orders::{ColleagueOrders, OrderLineSummary, PlaceOrderError};
