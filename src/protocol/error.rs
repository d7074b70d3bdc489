/// Errors that can occur while encoding or decoding wire data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A byte or raw number outside the 52-card domain.
    InvalidCard(u8),
    /// A frame or payload that does not describe a valid message.
    MalformedFrame(String),
}

impl CodecError {
    pub(crate) fn malformed<S>(reason: S) -> Self
    where
        S: Into<String>,
    {
        Self::MalformedFrame(reason.into())
    }
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCard(b) => write!(f, "invalid card: 0x{:02x}", b),
            Self::MalformedFrame(s) => write!(f, "malformed frame: {}", s),
        }
    }
}

impl std::error::Error for CodecError {}
