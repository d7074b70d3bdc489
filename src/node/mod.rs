//! The seat runtime: configuration, the processor loop, and the ledger
//! a seat returns when the game ends.
mod config;
mod ledger;
mod runtime;

pub use config::*;
pub use ledger::*;
pub use runtime::*;
