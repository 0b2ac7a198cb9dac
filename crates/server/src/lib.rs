//! Lunchbox server library.
//!
//! Everything the `lunchbox-server` binary serves lives here so the CLI
//! and integration tooling can reuse the repositories, services, and
//! configuration without going through HTTP.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`db`] - `PostgreSQL` pool and repositories
//! - [`models`] - Domain models and session types
//! - [`middleware`] - Session layer and auth extractors
//! - [`services`] - Login, colleague management, and order logic
//! - [`routes`] - HTTP handlers and templates
//! - [`error`] - Request-level error type and sentry helpers
//! - [`state`] - Shared application state
//! - [`filters`] - Askama template filters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
