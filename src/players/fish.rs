use super::Strategy;
use crate::PASS_SIZE;
use crate::cards::Card;
use crate::coordinator::Event;
use crate::coordinator::Snapshot;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Bot that chooses uniformly among what it is allowed to do.
pub struct Fish(SmallRng);

impl Fish {
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Strategy for Fish {
    async fn pass(&mut self, snapshot: &Snapshot) -> Vec<Card> {
        let hand = snapshot.hand.iter().collect::<Vec<_>>();
        hand.choose_multiple(&mut self.0, PASS_SIZE).copied().collect()
    }
    async fn play(&mut self, _: &Snapshot, legal: &[Card]) -> Card {
        legal
            .choose(&mut self.0)
            .copied()
            .unwrap_or(Card::TWO_OF_CLUBS)
    }
    async fn notify(&mut self, _: &Event) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::coordinator::Phase;
    use crate::rules::Trick;

    #[tokio::test]
    async fn stays_within_bounds() {
        let hand = Deck::new().deal()[2];
        let ref snapshot = Snapshot {
            seat: 2,
            hand_number: 1,
            phase: Phase::Passing,
            direction: None,
            token: Some(2),
            hand,
            trick: Trick::new(),
            hearts_broken: false,
            tricks: 0,
            taken: [0; 4],
            totals: [0; 4],
        };
        let mut fish = Fish::seeded(3);
        let passed = fish.pass(snapshot).await;
        assert_eq!(passed.len(), PASS_SIZE);
        assert!(passed.iter().all(|c| hand.contains(c)));
        let legal = hand.first(4);
        for _ in 0..20 {
            assert!(legal.contains(&fish.play(snapshot, &legal).await));
        }
    }
}
