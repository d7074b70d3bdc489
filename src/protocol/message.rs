use super::CodecError;
use super::Frame;
use super::Kind;
use super::target::seat;
use crate::HAND_SIZE;
use crate::N;
use crate::PASS_SIZE;
use crate::Points;
use crate::Position;
use crate::cards::Card;
use crate::cards::Hand;
use crate::rules::Direction;
use bytes::Bytes;
use serde::Deserialize;
use serde::Serialize;

/// Seat id on the wire meaning "nobody shot the moon".
const NO_SHOOTER: u8 = 0xFF;

/// Which phase a phase-start frame opens.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Passing(Direction),
    Tricks,
}

/// The arbiter's resolution of one trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSummary {
    pub winner: Position,
    pub plays: [(Position, Card); N],
    pub points: Points,
}

/// The arbiter's resolution of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub scores: [Points; N],
    pub totals: [Points; N],
    pub moon: Option<Position>,
}

/// Final standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Position,
    pub totals: [Points; N],
}

/// Typed payload of a [`Frame`], one variant per [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Token(Position),
    Start,
    Deal(Hand),
    Phase(Stage),
    Pass([Card; PASS_SIZE]),
    Play(Card),
    Trick(TrickSummary),
    Summary(HandSummary),
    GameOver(GameResult),
}

impl Message {
    pub fn kind(&self) -> Kind {
        match self {
            Message::Token(_) => Kind::Token,
            Message::Start => Kind::Start,
            Message::Deal(_) => Kind::Deal,
            Message::Phase(_) => Kind::Phase,
            Message::Pass(_) => Kind::Pass,
            Message::Play(_) => Kind::Play,
            Message::Trick(_) => Kind::Trick,
            Message::Summary(_) => Kind::Summary,
            Message::GameOver(_) => Kind::GameOver,
        }
    }

    pub fn payload(&self) -> Bytes {
        let bytes: Vec<u8> = match self {
            Message::Token(s) => vec![*s],
            Message::Start => vec![],
            Message::Deal(hand) => hand.iter().map(u8::from).collect(),
            Message::Phase(Stage::Passing(d)) => vec![0, u8::from(*d)],
            Message::Phase(Stage::Tricks) => vec![1],
            Message::Pass(cards) => cards.iter().copied().map(u8::from).collect(),
            Message::Play(card) => vec![u8::from(*card)],
            Message::Trick(t) => std::iter::once(t.winner)
                .chain(t.plays.iter().flat_map(|(s, c)| [*s, u8::from(*c)]))
                .chain(std::iter::once(narrow(t.points)))
                .collect(),
            Message::Summary(h) => h
                .scores
                .iter()
                .chain(h.totals.iter())
                .copied()
                .map(narrow)
                .chain(std::iter::once(h.moon.unwrap_or(NO_SHOOTER)))
                .collect(),
            Message::GameOver(g) => std::iter::once(g.winner)
                .chain(g.totals.iter().copied().map(narrow))
                .collect(),
        };
        Bytes::from(bytes)
    }

    pub fn decode(kind: Kind, payload: &[u8]) -> Result<Self, CodecError> {
        match kind {
            Kind::Token => {
                let [s] = exact::<1>(kind, payload)?;
                Ok(Message::Token(seat(s)?))
            }
            Kind::Start => {
                exact::<0>(kind, payload)?;
                Ok(Message::Start)
            }
            Kind::Deal => {
                let bytes = exact::<HAND_SIZE>(kind, payload)?;
                let hand = Hand::from(cards(&bytes)?);
                match hand.size() == HAND_SIZE {
                    true => Ok(Message::Deal(hand)),
                    false => Err(CodecError::malformed("deal repeats a card")),
                }
            }
            Kind::Phase => match payload {
                [0, d] => Ok(Message::Phase(Stage::Passing(Direction::try_from(*d)?))),
                [1] => Ok(Message::Phase(Stage::Tricks)),
                _ => Err(CodecError::malformed(format!(
                    "bad phase payload {:02x?}",
                    payload
                ))),
            },
            Kind::Pass => {
                let bytes = exact::<PASS_SIZE>(kind, payload)?;
                let cards = cards(&bytes)?;
                match Hand::from(cards.as_slice()).size() == PASS_SIZE {
                    true => Ok(Message::Pass([cards[0], cards[1], cards[2]])),
                    false => Err(CodecError::malformed("pass repeats a card")),
                }
            }
            Kind::Play => {
                let [c] = exact::<1>(kind, payload)?;
                Ok(Message::Play(Card::try_from(c)?))
            }
            Kind::Trick => {
                let bytes = exact::<{ 2 + 2 * N }>(kind, payload)?;
                let mut plays = [(0, Card::TWO_OF_CLUBS); N];
                for (i, play) in plays.iter_mut().enumerate() {
                    *play = (seat(bytes[1 + 2 * i])?, Card::try_from(bytes[2 + 2 * i])?);
                }
                Ok(Message::Trick(TrickSummary {
                    winner: seat(bytes[0])?,
                    plays,
                    points: bytes[1 + 2 * N] as Points,
                }))
            }
            Kind::Summary => {
                let bytes = exact::<{ 2 * N + 1 }>(kind, payload)?;
                let mut scores = [0; N];
                let mut totals = [0; N];
                for i in 0..N {
                    scores[i] = bytes[i] as Points;
                    totals[i] = bytes[N + i] as Points;
                }
                let moon = match bytes[2 * N] {
                    NO_SHOOTER => None,
                    s => Some(seat(s)?),
                };
                Ok(Message::Summary(HandSummary {
                    scores,
                    totals,
                    moon,
                }))
            }
            Kind::GameOver => {
                let bytes = exact::<{ 1 + N }>(kind, payload)?;
                let mut totals = [0; N];
                for i in 0..N {
                    totals[i] = bytes[1 + i] as Points;
                }
                Ok(Message::GameOver(GameResult {
                    winner: seat(bytes[0])?,
                    totals,
                }))
            }
        }
    }
}

/// isomorphism between typed messages and frame payloads
impl TryFrom<&Frame> for Message {
    type Error = CodecError;
    fn try_from(frame: &Frame) -> Result<Self, Self::Error> {
        Self::decode(frame.kind, &frame.payload)
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Message::Token(s) => write!(f, "token → P{}", s),
            Message::Start => write!(f, "start"),
            Message::Deal(hand) => write!(f, "deal {}", hand),
            Message::Phase(stage) => write!(f, "phase {}", stage),
            Message::Pass(cards) => write!(f, "pass {} {} {}", cards[0], cards[1], cards[2]),
            Message::Play(card) => write!(f, "play {}", card),
            Message::Trick(t) => write!(f, "trick → P{} ({} pts)", t.winner, t.points),
            Message::Summary(h) => write!(f, "hand {:?} totals {:?}", h.scores, h.totals),
            Message::GameOver(g) => write!(f, "game over, P{} wins {:?}", g.winner, g.totals),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stage::Passing(d) => write!(f, "passing {}", d),
            Stage::Tricks => write!(f, "tricks"),
        }
    }
}

fn exact<const L: usize>(kind: Kind, payload: &[u8]) -> Result<[u8; L], CodecError> {
    <[u8; L]>::try_from(payload).map_err(|_| {
        CodecError::malformed(format!(
            "{} payload has {} bytes, expected {}",
            kind,
            payload.len(),
            L
        ))
    })
}

fn cards(bytes: &[u8]) -> Result<Vec<Card>, CodecError> {
    bytes.iter().copied().map(Card::try_from).collect()
}

fn narrow(points: Points) -> u8 {
    u8::try_from(points).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    fn roundtrip(message: Message) {
        let payload = message.payload();
        assert_eq!(Message::decode(message.kind(), &payload), Ok(message));
    }

    #[test]
    fn control_messages() {
        roundtrip(Message::Token(3));
        roundtrip(Message::Start);
        roundtrip(Message::Phase(Stage::Passing(Direction::Across)));
        roundtrip(Message::Phase(Stage::Tricks));
    }

    #[test]
    fn summaries() {
        roundtrip(Message::Trick(TrickSummary {
            winner: 1,
            plays: [(0, c("5c")), (1, c("Kc")), (2, c("2h")), (3, c("Qs"))],
            points: 14,
        }));
        roundtrip(Message::Summary(HandSummary {
            scores: [0, 26, 26, 26],
            totals: [0, 52, 78, 99],
            moon: Some(0),
        }));
        roundtrip(Message::Summary(HandSummary {
            scores: [3, 13, 10, 0],
            totals: [3, 13, 10, 0],
            moon: None,
        }));
        roundtrip(Message::GameOver(GameResult {
            winner: 1,
            totals: [101, 40, 60, 70],
        }));
    }

    #[test]
    fn phase_layout() {
        let passing = Message::Phase(Stage::Passing(Direction::Right));
        assert_eq!(&passing.payload()[..], &[0, 1]);
        assert_eq!(&Message::Phase(Stage::Tricks).payload()[..], &[1]);
    }

    #[test]
    fn deal_is_sorted() {
        let hand = Hand::from(Card::parse("Ks 2c Ah 3d 4d 5d 6d 7d 8d 9d Td Jd Qd").unwrap());
        let payload = Message::Deal(hand).payload();
        assert_eq!(payload.len(), HAND_SIZE);
        assert!(payload.windows(2).all(|w| {
            let (a, b) = (Card::try_from(w[0]).unwrap(), Card::try_from(w[1]).unwrap());
            a.index() < b.index()
        }));
        roundtrip(Message::Deal(hand));
    }

    #[test]
    fn rejects_structural_errors() {
        assert!(Message::decode(Kind::Token, &[]).is_err());
        assert!(Message::decode(Kind::Token, &[4]).is_err());
        assert!(Message::decode(Kind::Start, &[0]).is_err());
        assert!(Message::decode(Kind::Play, &[0x00]).is_err());
        assert!(Message::decode(Kind::Phase, &[0, 4]).is_err());
        assert!(Message::decode(Kind::Phase, &[2]).is_err());
        assert!(Message::decode(Kind::Pass, &[0x12, 0x12, 0x13]).is_err());
        assert!(Message::decode(Kind::Summary, &[0; 9][..8]).is_err());
        assert!(Message::decode(Kind::Summary, &[0, 0, 0, 0, 0, 0, 0, 0, 7]).is_err());
    }
}
