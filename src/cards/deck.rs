use super::card::Card;
use super::hand::Hand;
use super::suit::Suit;
use super::value::Value;
use crate::HAND_SIZE;
use crate::N;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered 52-card deck.
///
/// Unlike a [`Hand`], order matters here: dealing hands out consecutive
/// runs of thirteen, so a fixed order (or a fixed shuffle seed) fixes
/// every seat's cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh deck in suit-major order.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Value::all().into_iter().map(move |v| Card::from((v, s))))
                .collect(),
        )
    }
    /// A fresh deck shuffled by the given generator.
    pub fn shuffled<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut deck = Self::new();
        deck.0.shuffle(rng);
        deck
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// Splits the deck into one hand per seat, thirteen consecutive cards each.
    pub fn deal(&self) -> [Hand; N] {
        let mut hands = [Hand::empty(); N];
        self.0
            .chunks(HAND_SIZE)
            .zip(hands.iter_mut())
            .for_each(|(chunk, hand)| *hand = Hand::from(chunk));
        hands
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        debug_assert!(cards.len() == N * HAND_SIZE);
        Self(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn fresh_deck_is_complete() {
        let deck = Deck::new();
        assert_eq!(deck.cards().len(), 52);
        assert_eq!(Hand::from(deck.cards()).size(), 52);
    }

    #[test]
    fn deal_partitions_deck() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let hands = Deck::shuffled(rng).deal();
        assert!(hands.iter().all(|h| h.size() == HAND_SIZE));
        let union = hands.iter().fold(0u64, |a, h| a | u64::from(*h));
        assert_eq!(Hand::from(union).size(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let a = Deck::shuffled(&mut SmallRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn unshuffled_deal_is_by_suit() {
        let hands = Deck::new().deal();
        assert_eq!(hands[1].of(Suit::C).size(), 13);
        assert!(hands[1].contains(&Card::TWO_OF_CLUBS));
        assert!(hands[3].contains(&Card::QUEEN_OF_SPADES));
    }
}
