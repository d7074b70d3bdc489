use super::CodecError;
use crate::BROADCAST;
use crate::N;
use crate::Position;

/// Destination of a frame: one seat, or every seat.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Target {
    Seat(Position),
    Broadcast,
}

impl Target {
    /// Whether a seat is addressed, directly or by broadcast.
    pub fn reaches(&self, seat: Position) -> bool {
        match self {
            Target::Seat(s) => *s == seat,
            Target::Broadcast => true,
        }
    }
}

impl TryFrom<u8> for Target {
    type Error = CodecError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            BROADCAST => Ok(Target::Broadcast),
            n if (n as usize) < N => Ok(Target::Seat(n)),
            n => Err(CodecError::malformed(format!("destination {} out of range", n))),
        }
    }
}
impl From<Target> for u8 {
    fn from(t: Target) -> u8 {
        match t {
            Target::Seat(s) => s,
            Target::Broadcast => BROADCAST,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Target::Seat(s) => write!(f, "P{}", s),
            Target::Broadcast => write!(f, "*"),
        }
    }
}

/// Validates a seat id carried in a header or payload.
pub(crate) fn seat(n: u8) -> Result<Position, CodecError> {
    match (n as usize) < N {
        true => Ok(n),
        false => Err(CodecError::malformed(format!("seat {} out of range", n))),
    }
}
