use crate::ARBITER;
use crate::BASE_PORT;
use crate::DECISION_TIMEOUT;
use crate::N;
use crate::Position;
use crate::QUEUE_CAPACITY;
use crate::cards::Deck;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::time::Duration;

/// Everything a seat needs to join the ring.
#[derive(Debug, Clone)]
pub struct RingConfig {
    pub seat: Position,
    pub arbiter: Position,
    pub bind: SocketAddr,
    /// `host:port` of the next seat round the ring.
    pub successor: String,
    /// Upper bound on one strategy decision.
    pub decision: Duration,
    /// Silence after which the arbiter re-grants the token.
    pub stall: Duration,
    /// Delay before the arbiter deals, giving other seats time to bind.
    pub warmup: Duration,
    pub queue: usize,
    /// Fixes the arbiter's shuffles.
    pub seed: Option<u64>,
    /// Deals every hand from this order instead of shuffling.
    pub deck: Option<Deck>,
}

impl RingConfig {
    /// Seat `i` on localhost at `BASE_PORT + i`, sending to seat `i + 1`.
    pub fn local(seat: Position) -> Self {
        let next = (seat as usize + 1) % N;
        Self {
            seat,
            arbiter: ARBITER,
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, BASE_PORT + seat as u16)),
            successor: format!("{}:{}", Ipv4Addr::LOCALHOST, BASE_PORT + next as u16),
            decision: DECISION_TIMEOUT,
            stall: DECISION_TIMEOUT * 2,
            warmup: Duration::from_secs(1),
            queue: QUEUE_CAPACITY,
            seed: None,
            deck: None,
        }
    }
    pub fn with_decision(mut self, decision: Duration) -> Self {
        self.decision = decision;
        self.stall = decision * 2;
        self
    }
    pub fn is_arbiter(&self) -> bool {
        self.seat == self.arbiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_table() {
        let three = RingConfig::local(3);
        assert_eq!(three.bind.port(), 5003);
        assert_eq!(three.successor, "127.0.0.1:5000");
        assert!(!three.is_arbiter());
        assert!(RingConfig::local(0).is_arbiter());
    }

    #[test]
    fn stall_follows_decision() {
        let config = RingConfig::local(1).with_decision(Duration::from_secs(5));
        assert_eq!(config.stall, Duration::from_secs(10));
    }
}
