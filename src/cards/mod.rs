//! Card representation with the one-byte wire encoding.
//!
//! - [`Card`]: a `(Value, Suit)` pair, one byte on the wire
//! - [`Hand`]: an unordered set of cards as a 52-bit mask
//! - [`Deck`]: an ordered deck for shuffling and dealing
mod card;
mod deck;
mod hand;
mod suit;
mod value;

pub use card::*;
pub use deck::*;
pub use hand::*;
pub use suit::*;
pub use value::*;
