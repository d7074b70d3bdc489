use super::suit::Suit;
use super::value::Value;
use crate::Points;
use crate::protocol::CodecError;

/// A playing card.
///
/// Internally the 52 cards are mapped to `0..52` in suit-major order
/// (`suit * 13 + value - 1`), which is the bit position a card occupies
/// in a [`Hand`]. On the wire a card is a single byte with the value in
/// bits 0-3 and the suit in bits 4-5.
///
/// ```text
/// Q♠   index 50   wire 0b0011_1100
/// 2♣   index 14   wire 0b0001_0010
/// ```
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    pub const TWO_OF_CLUBS: Card = Card(13 + 1);
    pub const QUEEN_OF_SPADES: Card = Card(39 + 11);

    pub fn value(&self) -> Value {
        Value::all()[(self.0 % 13) as usize]
    }
    pub fn suit(&self) -> Suit {
        Suit::all()[(self.0 / 13) as usize]
    }
    /// Position in suit-major order, `0..52`.
    pub fn index(&self) -> u8 {
        self.0
    }
    /// Penalty carried by this card: one per Heart, thirteen for Q♠.
    pub fn points(&self) -> Points {
        match (self.suit(), *self == Self::QUEEN_OF_SPADES) {
            (Suit::H, _) => 1,
            (_, true) => 13,
            _ => 0,
        }
    }
    pub fn is_point(&self) -> bool {
        self.points() > 0
    }
    /// Packs raw wire numbers, failing outside the 52-card domain.
    pub fn encode(value: u8, suit: u8) -> Result<u8, CodecError> {
        let value = Value::try_from(value).map_err(|_| CodecError::InvalidCard(value))?;
        let suit = Suit::try_from(suit).map_err(|_| CodecError::InvalidCard(suit))?;
        Ok(u8::from(Card::from((value, suit))))
    }
    /// Unpacks a wire byte into raw `(value, suit)` numbers.
    pub fn decode(byte: u8) -> Result<(u8, u8), CodecError> {
        Card::try_from(byte).map(|c| (u8::from(c.value()), u8::from(c.suit())))
    }
}

/// (Value, Suit) isomorphism
impl From<(Value, Suit)> for Card {
    fn from((v, s): (Value, Suit)) -> Self {
        Self(u8::from(s) * 13 + u8::from(v) - 1)
    }
}

/// wire byte isomorphism
/// bits 0-3 value, bits 4-5 suit, bits 6-7 clear
/// Q♠
/// 0b0011_1100
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit()) << 4 | u8::from(c.value())
    }
}
impl TryFrom<u8> for Card {
    type Error = CodecError;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        if byte & 0xC0 != 0 {
            return Err(CodecError::InvalidCard(byte));
        }
        let value = Value::try_from(byte & 0x0F).map_err(|_| CodecError::InvalidCard(byte))?;
        let suit = Suit::try_from(byte >> 4).map_err(|_| CodecError::InvalidCard(byte))?;
        Ok(Card::from((value, suit)))
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}

impl Card {
    /// Card at a suit-major bit position. Callers iterate masked bitsets.
    pub(crate) fn nth(index: u32) -> Self {
        debug_assert!(index < 52);
        Self(index as u8)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.value(), self.suit())
    }
}

/// str isomorphism
/// the last character is the suit, everything before it the value
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (split, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| String::from("empty card str"))?;
        let value = Value::try_from(&s[..split])?;
        let suit = Suit::try_from(&s[split..])?;
        Ok(Card::from((value, suit)))
    }
}
impl Card {
    /// Parses whitespace-separated card notations like `"2c Qs 10h"`.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}
