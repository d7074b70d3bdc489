//! Per-seat turn handling.
//!
//! The [`Coordinator`] advances one seat through
//! `Waiting → Dealt → Passing → Tricks → HandDone → … → GameOver`,
//! consulting its strategy whenever it holds the token. Strategy answers
//! are bounded in time and checked in [`decision`].
pub mod decision;
mod event;
mod machine;
mod phase;
mod snapshot;

pub use event::*;
pub use machine::*;
pub use phase::*;
pub use snapshot::*;
