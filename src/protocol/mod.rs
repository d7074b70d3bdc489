//! Ring wire format.
//!
//! A [`Frame`] is the raw datagram with its five-byte header; a
//! [`Message`] is the typed reading of a frame's payload.
mod error;
mod frame;
mod kind;
mod message;
mod sequence;
mod target;

pub use error::*;
pub use frame::*;
pub use kind::*;
pub use message::*;
pub use sequence::*;
pub use target::Target;
