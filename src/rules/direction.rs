use crate::N;
use crate::Position;
use crate::protocol::CodecError;
use serde::Deserialize;
use serde::Serialize;

/// Where a seat's three passed cards go this hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Across = 2,
    None = 3,
}

impl Direction {
    pub const fn all() -> [Direction; 4] {
        [Self::Left, Self::Right, Self::Across, Self::None]
    }
    /// Direction for the `n`th hand of a game, counting from zero.
    pub const fn for_hand(n: usize) -> Self {
        Self::all()[n % 4]
    }
    pub const fn rotate(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Across,
            Self::Across => Self::None,
            Self::None => Self::Left,
        }
    }
    /// The seat receiving `seat`'s pass, if anyone does.
    pub fn target(&self, seat: Position) -> Option<Position> {
        let offset = match self {
            Self::Left => 1,
            Self::Right => N - 1,
            Self::Across => 2,
            Self::None => return None,
        };
        Some(((seat as usize + offset) % N) as Position)
    }
}

impl TryFrom<u8> for Direction {
    type Error = CodecError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            2 => Ok(Self::Across),
            3 => Ok(Self::None),
            _ => Err(CodecError::malformed(format!("unknown direction {}", n))),
        }
    }
}
impl From<Direction> for u8 {
    fn from(d: Direction) -> u8 {
        d as u8
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Across => write!(f, "across"),
            Self::None => write!(f, "hold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_every_four_hands() {
        assert_eq!(Direction::for_hand(0), Direction::Left);
        assert_eq!(Direction::for_hand(3), Direction::None);
        assert_eq!(Direction::for_hand(4), Direction::Left);
        for n in 0..8 {
            assert_eq!(Direction::for_hand(n).rotate(), Direction::for_hand(n + 1));
        }
    }

    #[test]
    fn targets() {
        assert_eq!(Direction::Left.target(3), Some(0));
        assert_eq!(Direction::Right.target(0), Some(3));
        assert_eq!(Direction::Across.target(1), Some(3));
        assert_eq!(Direction::None.target(1), None);
    }

    #[test]
    fn passes_form_a_permutation() {
        for d in [Direction::Left, Direction::Right, Direction::Across] {
            let mut seen = [false; N];
            for s in 0..N as Position {
                seen[d.target(s).unwrap() as usize] = true;
            }
            assert!(seen.iter().all(|b| *b));
        }
    }

    #[test]
    fn wire_codes() {
        for d in Direction::all() {
            assert_eq!(Direction::try_from(u8::from(d)), Ok(d));
        }
        assert!(Direction::try_from(4u8).is_err());
    }
}
