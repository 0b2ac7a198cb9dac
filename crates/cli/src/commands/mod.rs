//! CLI command implementations.

pub mod colleague;
pub mod migrate;
pub mod seed;
