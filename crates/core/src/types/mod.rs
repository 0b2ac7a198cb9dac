//! Core types for Lunchbox.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod name;
pub mod role;

pub use id::*;
pub use money::{Money, MoneyError};
pub use name::{ColleagueName, NameError};
pub use role::Role;
