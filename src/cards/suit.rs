use crate::protocol::CodecError;

/// Card suit, numbered as on the wire.
///
/// The ordering (D < C < H < S) is the wire ordering, and also the order
/// in which a sorted [`Hand`] lists its cards.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    #[default]
    D = 0,
    C = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in wire order.
    pub const fn all() -> [Suit; 4] {
        [Suit::D, Suit::C, Suit::H, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::D => '♦',
            Suit::C => '♣',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
    /// Bitmask of this suit's 13 cards within a [`Hand`].
    ///
    /// [`Hand`]: super::hand::Hand
    pub const fn mask(&self) -> u64 {
        0x1FFF << (*self as u64 * 13)
    }
}

/// u8 isomorphism over the 2-bit wire code
impl TryFrom<u8> for Suit {
    type Error = CodecError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Suit::D),
            1 => Ok(Suit::C),
            2 => Ok(Suit::H),
            3 => Ok(Suit::S),
            _ => Err(CodecError::InvalidCard(n)),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "d" | "♦" => Ok(Suit::D),
            "c" | "♣" => Ok(Suit::C),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::try_from(u8::from(suit)).unwrap());
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Suit::try_from(4u8).is_err());
    }

    #[test]
    fn masks_partition_the_deck() {
        let union = Suit::all().iter().fold(0u64, |a, s| a | s.mask());
        let overlap = Suit::all()
            .iter()
            .map(|s| s.mask().count_ones())
            .sum::<u32>();
        assert_eq!(union, (1 << 52) - 1);
        assert_eq!(overlap, 52);
    }
}
