use crate::PASS_SIZE;
use crate::Position;
use crate::cards::Card;
use crate::cards::Hand;
use crate::protocol::GameResult;
use crate::protocol::HandSummary;
use crate::protocol::Stage;
use crate::protocol::TrickSummary;

/// Progress notifications delivered to a seat's strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new hand is starting; hands are counted from zero.
    HandStart { hand: usize },
    /// This seat's cards for the hand.
    Dealt(Hand),
    Stage(Stage),
    Token(Position),
    /// This seat's own pass.
    Passed {
        to: Position,
        cards: [Card; PASS_SIZE],
    },
    /// Cards passed to this seat.
    Received {
        from: Position,
        cards: [Card; PASS_SIZE],
    },
    Played { seat: Position, card: Card },
    Trick(TrickSummary),
    Hand(HandSummary),
    GameOver(GameResult),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::HandStart { hand } => write!(f, "Hand #{}", hand + 1),
            Event::Dealt(hand) => write!(f, "Your cards: {}", hand),
            Event::Stage(stage) => write!(f, "Phase: {}", stage),
            Event::Token(seat) => write!(f, "P{} to act", seat),
            Event::Passed { to, cards } => {
                write!(f, "You pass {} {} {} to P{}", cards[0], cards[1], cards[2], to)
            }
            Event::Received { from, cards } => {
                write!(f, "P{} passes you {} {} {}", from, cards[0], cards[1], cards[2])
            }
            Event::Played { seat, card } => write!(f, "P{}: {}", seat, card),
            Event::Trick(t) => write!(f, "P{} takes the trick ({} pts)", t.winner, t.points),
            Event::Hand(h) => match h.moon {
                Some(s) => write!(f, "P{} shot the moon. Totals {:?}", s, h.totals),
                None => write!(f, "Hand scores {:?}, totals {:?}", h.scores, h.totals),
            },
            Event::GameOver(g) => write!(f, "P{} wins with totals {:?}", g.winner, g.totals),
        }
    }
}
