use super::Strategy;
use crate::PASS_SIZE;
use crate::cards::Card;
use crate::cards::Suit;
use crate::cards::Value;
use crate::coordinator::Event;
use crate::coordinator::Snapshot;

/// Deterministic bot: sheds dangerous cards in the pass and ducks with
/// its lowest card in play.
#[derive(Debug, Default, Clone, Copy)]
pub struct Heuristic;

impl Heuristic {
    /// High spades first, then high hearts, then whatever is highest.
    fn shed(snapshot: &Snapshot) -> Vec<Card> {
        let hand = snapshot.hand;
        let spades = [Value::Queen, Value::King, Value::Ace]
            .into_iter()
            .map(|v| Card::from((v, Suit::S)));
        let hearts = [Value::King, Value::Queen, Value::Jack, Value::Ace]
            .into_iter()
            .map(|v| Card::from((v, Suit::H)));
        let mut rest = hand.iter().collect::<Vec<_>>();
        rest.sort_by_key(|c| std::cmp::Reverse(c.value()));
        let mut chosen = Vec::with_capacity(PASS_SIZE);
        for card in spades.chain(hearts).filter(|c| hand.contains(c)).chain(rest) {
            if chosen.len() == PASS_SIZE {
                break;
            }
            if !chosen.contains(&card) {
                chosen.push(card);
            }
        }
        chosen
    }
    /// Clubs, then diamonds, then spades, then hearts; low to high within.
    fn rank(card: &Card) -> (u8, Value) {
        let suit = match card.suit() {
            Suit::C => 0,
            Suit::D => 1,
            Suit::S => 2,
            Suit::H => 3,
        };
        (suit, card.value())
    }
}

#[async_trait::async_trait]
impl Strategy for Heuristic {
    async fn pass(&mut self, snapshot: &Snapshot) -> Vec<Card> {
        Self::shed(snapshot)
    }
    async fn play(&mut self, _: &Snapshot, legal: &[Card]) -> Card {
        legal
            .iter()
            .copied()
            .min_by_key(Self::rank)
            .unwrap_or(Card::TWO_OF_CLUBS)
    }
    async fn notify(&mut self, _: &Event) {}
}
