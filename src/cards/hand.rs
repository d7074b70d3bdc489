use super::card::Card;
use super::suit::Suit;

/// An unordered set of cards stored as a 52-bit mask.
///
/// Bits are laid out in suit-major order, so walking the set from the
/// least significant bit yields cards sorted by suit then value. That is
/// the order a seat's private hand is shown and the order every
/// "first N cards" default choice relies on.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "Vec<Card>", from = "Vec<Card>")]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Inserts a card, returning false if it was already held.
    pub fn add(&mut self, card: Card) -> bool {
        let fresh = !self.contains(&card);
        self.0 |= u64::from(card);
        fresh
    }
    /// Removes a card, returning false if it was not held.
    pub fn remove(&mut self, card: Card) -> bool {
        let held = self.contains(&card);
        self.0 &= !u64::from(card);
        held
    }
    /// Cards of one suit.
    pub fn of(&self, suit: Suit) -> Hand {
        Self(self.0 & suit.mask())
    }
    /// Cards matching a predicate.
    pub fn filter<F>(&self, f: F) -> Hand
    where
        F: Fn(&Card) -> bool,
    {
        self.iter().filter(|c| f(c)).collect()
    }
    /// Sorted iteration by suit then value.
    pub fn iter(&self) -> impl Iterator<Item = Card> + use<> {
        let mut mask = self.0;
        std::iter::from_fn(move || match mask {
            0 => None,
            _ => {
                let card = Card::nth(mask.trailing_zeros());
                mask &= mask - 1;
                Some(card)
            }
        })
    }
    /// The lowest cards in sorted order.
    pub fn first(&self, n: usize) -> Vec<Card> {
        self.iter().take(n).collect()
    }

    const fn mask() -> u64 {
        (1 << 52) - 1
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0, |a, b| a | b))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
