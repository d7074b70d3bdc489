use super::CodecError;

/// The nine frame types, numbered as on the wire.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Token = 1,
    Start = 2,
    Deal = 3,
    Phase = 4,
    Pass = 5,
    Play = 6,
    Trick = 7,
    Summary = 8,
    GameOver = 9,
}

impl TryFrom<u8> for Kind {
    type Error = CodecError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Kind::Token),
            2 => Ok(Kind::Start),
            3 => Ok(Kind::Deal),
            4 => Ok(Kind::Phase),
            5 => Ok(Kind::Pass),
            6 => Ok(Kind::Play),
            7 => Ok(Kind::Trick),
            8 => Ok(Kind::Summary),
            9 => Ok(Kind::GameOver),
            _ => Err(CodecError::malformed(format!("unknown kind {}", n))),
        }
    }
}
impl From<Kind> for u8 {
    fn from(k: Kind) -> u8 {
        k as u8
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Token => write!(f, "TOKEN"),
            Kind::Start => write!(f, "START"),
            Kind::Deal => write!(f, "DEAL"),
            Kind::Phase => write!(f, "PHASE"),
            Kind::Pass => write!(f, "PASS"),
            Kind::Play => write!(f, "PLAY"),
            Kind::Trick => write!(f, "TRICK"),
            Kind::Summary => write!(f, "SUMMARY"),
            Kind::GameOver => write!(f, "GAME_OVER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 1..=9u8 {
            assert_eq!(u8::from(Kind::try_from(n).unwrap()), n);
        }
    }

    #[test]
    fn rejects_unknown() {
        assert!(Kind::try_from(0u8).is_err());
        assert!(Kind::try_from(10u8).is_err());
    }
}
