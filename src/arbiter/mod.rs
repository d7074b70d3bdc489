//! Leader-only authority: deals, tracks every hand, resolves tricks and
//! hands, and keeps the ring moving when it stalls.
mod table;

pub use table::*;
