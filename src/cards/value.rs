use crate::protocol::CodecError;

/// Face value of a card, numbered as on the wire.
///
/// Ace is low: it counts as 1 both in the encoding and when deciding who
/// wins a trick, so King is the highest card of any suit.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Value {
    #[default]
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Value {
    /// All thirteen values from Ace up to King.
    pub const fn all() -> [Value; 13] {
        [
            Value::Ace,
            Value::Two,
            Value::Three,
            Value::Four,
            Value::Five,
            Value::Six,
            Value::Seven,
            Value::Eight,
            Value::Nine,
            Value::Ten,
            Value::Jack,
            Value::Queen,
            Value::King,
        ]
    }
}

/// u8 isomorphism over the 4-bit wire code
impl TryFrom<u8> for Value {
    type Error = CodecError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=13 => Ok(Value::all()[n as usize - 1]),
            _ => Err(CodecError::InvalidCard(n)),
        }
    }
}
impl From<Value> for u8 {
    fn from(v: Value) -> u8 {
        v as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Value {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "A" | "1" => Ok(Value::Ace),
            "2" => Ok(Value::Two),
            "3" => Ok(Value::Three),
            "4" => Ok(Value::Four),
            "5" => Ok(Value::Five),
            "6" => Ok(Value::Six),
            "7" => Ok(Value::Seven),
            "8" => Ok(Value::Eight),
            "9" => Ok(Value::Nine),
            "T" | "10" => Ok(Value::Ten),
            "J" => Ok(Value::Jack),
            "Q" => Ok(Value::Queen),
            "K" => Ok(Value::King),
            _ => Err(format!("invalid value str: {}", s)),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Ace => write!(f, "A"),
            Value::Jack => write!(f, "J"),
            Value::Queen => write!(f, "Q"),
            Value::King => write!(f, "K"),
            other => write!(f, "{}", u8::from(*other)),
        }
    }
}
