use crate::N;
use crate::Points;
use crate::Position;
use crate::cards::Card;
use crate::cards::Suit;
use serde::Serialize;

/// Result of a completed trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Position,
    pub points: Points,
    pub lead: Suit,
}

/// Resolves four plays: the highest card of the lead suit takes the
/// trick with every penalty card in it. Aces rank lowest.
pub fn outcome(plays: &[(Position, Card); N]) -> Outcome {
    let lead = plays[0].1.suit();
    let winner = plays
        .iter()
        .filter(|(_, c)| c.suit() == lead)
        .max_by_key(|(_, c)| c.value())
        .map(|(s, _)| *s)
        .unwrap_or(plays[0].0);
    let points = plays.iter().map(|(_, c)| c.points()).sum();
    Outcome {
        winner,
        points,
        lead,
    }
}

/// The cards on the table, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Trick(Vec<(Position, Card)>);

impl Trick {
    pub fn new() -> Self {
        Self(Vec::with_capacity(N))
    }
    /// Adds a play unless the trick is full or the seat already played.
    pub fn push(&mut self, seat: Position, card: Card) -> bool {
        if self.is_full() || self.0.iter().any(|(s, _)| *s == seat) {
            false
        } else {
            self.0.push((seat, card));
            true
        }
    }
    pub fn lead(&self) -> Option<Suit> {
        self.0.first().map(|(_, c)| c.suit())
    }
    pub fn plays(&self) -> &[(Position, Card)] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.0.len() == N
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    /// The four plays, once complete.
    pub fn complete(&self) -> Option<[(Position, Card); N]> {
        <[(Position, Card); N]>::try_from(self.0.as_slice()).ok()
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.complete().map(|plays| outcome(&plays))
    }
}

impl std::fmt::Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, (seat, card)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "P{}:{}", seat, card)?;
        }
        Ok(())
    }
}
