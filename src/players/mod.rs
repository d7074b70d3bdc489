//! Card selection strategies.
//!
//! - [`Strategy`]: what a seat asks when it must pass, play or settle a moon
//! - [`Heuristic`]: deterministic bot
//! - [`Fish`]: random bot
//! - [`Human`]: terminal prompts (requires `cli` feature)
mod fish;
mod heuristic;
#[cfg(feature = "cli")]
mod human;
mod strategy;

pub use fish::*;
pub use heuristic::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use strategy::*;
