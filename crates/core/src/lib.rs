//! Lunchbox Core - Shared types library.
//!
//! This crate provides common types used across all Lunchbox components:
//! - `server` - The sandwich-ordering web app
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//! `PostgreSQL` bindings for the newtypes live behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, names, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
