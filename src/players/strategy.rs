use crate::cards::Card;
use crate::coordinator::Event;
use crate::coordinator::Snapshot;
use crate::rules::Moon;

/// Trait for whatever picks a seat's cards.
/// Implementations can be bots, a human at a terminal, or anything else
/// that can answer within the decision timeout.
///
/// Answers are not trusted: the seat checks every pass and play, asks
/// again while time remains, and otherwise falls back to a fixed default.
#[async_trait::async_trait]
pub trait Strategy: Send {
    /// Choose three cards from `snapshot.hand` to pass.
    async fn pass(&mut self, snapshot: &Snapshot) -> Vec<Card>;
    /// Choose one card from `legal`, which is never empty.
    async fn play(&mut self, snapshot: &Snapshot, legal: &[Card]) -> Card;
    /// How to settle a moon shot when this seat deals and shoots.
    async fn moon(&mut self) -> Moon {
        Moon::default()
    }
    /// Receive notification of game progress.
    async fn notify(&mut self, event: &Event);
}
