//! Ring endpoint: a [`Link`] to the successor, a [`Receiver`] task that
//! forwards and filters, and an [`Outbox`] for frames this seat originates.
mod link;
mod memory;
mod outbox;
mod receiver;
mod udp;

pub use link::Link;
pub use memory::*;
pub use outbox::*;
pub use receiver::*;
pub use udp::*;
