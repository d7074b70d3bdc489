//! Pure Hearts rules: pass direction, legal plays, trick resolution and
//! hand scoring. Nothing here touches the network or a seat's state.
mod direction;
mod legal;
mod scoring;
mod trick;

pub use direction::*;
pub use legal::*;
pub use scoring::*;
pub use trick::*;
