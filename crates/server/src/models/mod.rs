//! Domain models for the lunchbox server.

pub mod colleague;
pub mod order;
pub mod sandwich;
pub mod session;

pub use colleague::Colleague;
pub use order::{OrderLine, SandwichTotal};
pub use sandwich::Sandwich;
pub use session::{CurrentColleague, keys as session_keys};
