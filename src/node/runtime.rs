use super::Ledger;
use super::RingConfig;
use crate::N;
use crate::Position;
use crate::arbiter::Arbiter;
use crate::cards::Deck;
use crate::coordinator::Coordinator;
use crate::coordinator::Outgoing;
use crate::coordinator::Phase;
use crate::players::Strategy;
use crate::protocol::Frame;
use crate::protocol::Message;
use crate::transport::Link;
use crate::transport::MemoryLink;
use crate::transport::Outbox;
use crate::transport::Receiver;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// One seat's process: a receiver task feeding a single processor loop.
///
/// The processor is the only place seat state changes. Frames the seat
/// sends to itself skip the ring and go to a private FIFO that is
/// drained before the shared queue.
pub struct Node {
    config: RingConfig,
    link: Arc<dyn Link>,
    strategy: Box<dyn Strategy>,
}

impl Node {
    pub fn new(config: RingConfig, link: Arc<dyn Link>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            config,
            link,
            strategy,
        }
    }

    /// Plays until game over and returns what the seat observed.
    pub async fn run(self) -> anyhow::Result<Ledger> {
        let Self {
            config,
            link,
            mut strategy,
        } = self;
        let seat = config.seat;
        let mut inbox = Receiver::spawn(seat, config.arbiter, link.clone(), config.queue);
        let mut outbox = Outbox::new(seat, config.arbiter, link);
        let mut coordinator =
            Coordinator::with_timeout(seat, config.decision).with_arbiter(config.arbiter);
        let mut arbiter = config.is_arbiter().then(|| {
            let arbiter = Arbiter::with_timeout(seat, config.seed, config.decision);
            match config.deck.clone() {
                Some(deck) => arbiter.with_deck(deck),
                None => arbiter,
            }
        });
        let mut pending = VecDeque::<Frame>::new();
        let mut ledger = Ledger::default();
        log::info!("[seat P{}] joined ring", seat);
        if let Some(arbiter) = arbiter.as_mut() {
            tokio::time::sleep(config.warmup).await;
            dispatch(&mut outbox, arbiter.start(), &mut pending).await;
        }
        loop {
            let frame = match pending.pop_front() {
                Some(frame) => frame,
                None => match tokio::time::timeout(config.stall, inbox.recv()).await {
                    Ok(Some(frame)) => frame,
                    Ok(None) => anyhow::bail!("receiver for P{} stopped", seat),
                    Err(_) => {
                        if let Some(arbiter) = arbiter.as_mut() {
                            dispatch(&mut outbox, arbiter.on_stall(), &mut pending).await;
                        }
                        continue;
                    }
                },
            };
            let message = match Message::try_from(&frame) {
                Ok(message) => message,
                Err(e) => {
                    log::warn!("[seat P{}] dropped {}: {}", seat, frame, e);
                    continue;
                }
            };
            ledger.record(&message);
            let mut outgoing = coordinator
                .handle(frame.origin, frame.dest, &message, strategy.as_mut())
                .await;
            if let Some(arbiter) = arbiter.as_mut() {
                outgoing.extend(
                    arbiter
                        .observe(frame.origin, frame.dest, &message, strategy.as_mut())
                        .await,
                );
            }
            dispatch(&mut outbox, outgoing, &mut pending).await;
            if coordinator.phase() == Phase::GameOver {
                break;
            }
        }
        log::info!("[seat P{}] left ring", seat);
        Ok(ledger)
    }
}

async fn dispatch(outbox: &mut Outbox, outgoing: Outgoing, pending: &mut VecDeque<Frame>) {
    for (message, target) in outgoing {
        if let Some(frame) = outbox.send(&message, target).await {
            pending.push_back(frame);
        }
    }
}

/// Runs a whole game in-process over a [`MemoryLink`] ring, one strategy
/// per seat, and returns each seat's ledger.
pub async fn simulate(
    strategies: Vec<Box<dyn Strategy>>,
    seed: Option<u64>,
    decision: Duration,
) -> anyhow::Result<Vec<Ledger>> {
    ring(strategies, decision, |config| config.seed = seed).await
}

/// Like [`simulate`], but every hand is dealt from `deck` as given.
pub async fn replay(
    strategies: Vec<Box<dyn Strategy>>,
    deck: Deck,
    decision: Duration,
) -> anyhow::Result<Vec<Ledger>> {
    ring(strategies, decision, |config| config.deck = Some(deck.clone())).await
}

async fn ring<F>(
    strategies: Vec<Box<dyn Strategy>>,
    decision: Duration,
    configure: F,
) -> anyhow::Result<Vec<Ledger>>
where
    F: Fn(&mut RingConfig),
{
    anyhow::ensure!(strategies.len() == N, "need {} strategies", N);
    let handles = MemoryLink::ring()
        .into_iter()
        .zip(strategies)
        .enumerate()
        .map(|(seat, (link, strategy))| {
            let mut config = RingConfig::local(seat as Position).with_decision(decision);
            config.warmup = Duration::ZERO;
            configure(&mut config);
            tokio::spawn(Node::new(config, Arc::new(link), strategy).run())
        })
        .collect::<Vec<_>>();
    let mut ledgers = Vec::with_capacity(N);
    for handle in handles {
        ledgers.push(handle.await??);
    }
    Ok(ledgers)
}
