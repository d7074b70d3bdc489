use super::Snapshot;
use crate::DECISION_ATTEMPTS;
use crate::PASS_SIZE;
use crate::cards::Card;
use crate::cards::Hand;
use crate::players::Strategy;
use crate::rules::Moon;
use std::time::Duration;
use tokio::time::Instant;
use tokio::time::timeout_at;

/// Asks for a pass until it gets three distinct held cards, time runs
/// out, or attempts are exhausted; then falls back to the three lowest.
pub async fn pass(
    strategy: &mut dyn Strategy,
    snapshot: &Snapshot,
    limit: Duration,
) -> Option<[Card; PASS_SIZE]> {
    let deadline = Instant::now() + limit;
    for attempt in 1..=DECISION_ATTEMPTS {
        match timeout_at(deadline, strategy.pass(snapshot)).await {
            Err(_) => {
                log::warn!("[seat P{}] pass timed out", snapshot.seat);
                break;
            }
            Ok(cards) => match valid_pass(&snapshot.hand, &cards) {
                Some(cards) => return Some(cards),
                None => log::warn!(
                    "[seat P{}] rejected pass {:?} (attempt {})",
                    snapshot.seat,
                    cards,
                    attempt
                ),
            },
        }
    }
    <[Card; PASS_SIZE]>::try_from(snapshot.hand.first(PASS_SIZE)).ok()
}

/// Asks for a play until it gets a legal card, time runs out, or
/// attempts are exhausted; then falls back to the lowest legal card.
pub async fn play(
    strategy: &mut dyn Strategy,
    snapshot: &Snapshot,
    legal: &Hand,
    limit: Duration,
) -> Option<Card> {
    let deadline = Instant::now() + limit;
    let options = legal.iter().collect::<Vec<_>>();
    for attempt in 1..=DECISION_ATTEMPTS {
        match timeout_at(deadline, strategy.play(snapshot, &options)).await {
            Err(_) => {
                log::warn!("[seat P{}] play timed out", snapshot.seat);
                break;
            }
            Ok(card) if legal.contains(&card) => return Some(card),
            Ok(card) => log::warn!(
                "[seat P{}] rejected play {} (attempt {})",
                snapshot.seat,
                card,
                attempt
            ),
        }
    }
    options.first().copied()
}

/// Moon settlement, defaulting when the strategy is too slow.
pub async fn moon(strategy: &mut dyn Strategy, limit: Duration) -> Moon {
    timeout_at(Instant::now() + limit, strategy.moon())
        .await
        .unwrap_or_default()
}

fn valid_pass(hand: &Hand, cards: &[Card]) -> Option<[Card; PASS_SIZE]> {
    let cards = <[Card; PASS_SIZE]>::try_from(cards).ok()?;
    let distinct = Hand::from(cards.as_slice());
    match distinct.size() == PASS_SIZE && cards.iter().all(|c| hand.contains(c)) {
        true => Some(cards),
        false => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::Event;
    use crate::coordinator::Phase;
    use crate::rules::Trick;

    /// Answers with garbage, or not at all.
    struct Stubborn {
        asked: usize,
        stall: bool,
    }

    #[async_trait::async_trait]
    impl Strategy for Stubborn {
        async fn pass(&mut self, _: &Snapshot) -> Vec<Card> {
            self.asked += 1;
            if self.stall {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Card::parse("Ah Ah Ah").unwrap()
        }
        async fn play(&mut self, _: &Snapshot, _: &[Card]) -> Card {
            self.asked += 1;
            if self.stall {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Card::QUEEN_OF_SPADES
        }
        async fn moon(&mut self) -> Moon {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Moon::Shooter
        }
        async fn notify(&mut self, _: &Event) {}
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            seat: 3,
            hand_number: 0,
            phase: Phase::Tricks,
            direction: None,
            token: Some(3),
            hand: Hand::from(Card::parse("3c 4c 9d Kh").unwrap()),
            trick: Trick::new(),
            hearts_broken: false,
            tricks: 0,
            taken: [0; 4],
            totals: [0; 4],
        }
    }

    #[tokio::test]
    async fn invalid_answers_fall_back_after_retries() {
        let mut s = Stubborn { asked: 0, stall: false };
        let ref snap = snapshot();
        let cards = pass(&mut s, snap, Duration::from_secs(1)).await;
        assert_eq!(cards.map(|c| c.to_vec()), Some(snap.hand.first(3)));
        assert_eq!(s.asked, DECISION_ATTEMPTS);
        let legal = Hand::from(Card::parse("9d Kh").unwrap());
        let card = play(&mut s, snap, &legal, Duration::from_secs(1)).await;
        assert_eq!(card, Card::try_from("9d").ok());
        assert_eq!(s.asked, 2 * DECISION_ATTEMPTS);
    }

    #[tokio::test]
    async fn slow_answers_fall_back_at_deadline() {
        let mut s = Stubborn { asked: 0, stall: true };
        let ref snap = snapshot();
        let legal = Hand::from(Card::parse("3c 4c").unwrap());
        let card = play(&mut s, snap, &legal, Duration::from_millis(100)).await;
        assert_eq!(card, Card::try_from("3c").ok());
        assert_eq!(s.asked, 1);
        let settle = moon(&mut s, Duration::from_millis(100)).await;
        assert_eq!(settle, Moon::Others);
    }
}
