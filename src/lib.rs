//! Four-seat Hearts coordinated over a token ring of datagram endpoints.
//!
//! Every seat runs the same process. Frames travel around the ring
//! `0 → 1 → 2 → 3 → 0`; a single circulating token decides who may pass
//! or play, and one seat (the arbiter) deals, resolves tricks and keeps
//! score.
//!
//! ## Layers
//!
//! - [`cards`]: cards, hands and decks with the one-byte wire encoding
//! - [`protocol`]: frame codec and typed message payloads
//! - [`rules`]: legal plays, trick resolution and hand scoring
//! - [`transport`]: ring endpoints that receive, filter and forward datagrams
//! - [`coordinator`]: per-seat turn state machine
//! - [`arbiter`]: leader-only dealing and scoring authority
//! - [`players`]: pluggable card selection strategies
//! - [`node`]: the seat runtime tying the layers together
pub mod arbiter;
pub mod cards;
pub mod coordinator;
pub mod node;
pub mod players;
pub mod protocol;
pub mod rules;
pub mod transport;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Seat index around the ring, `0..N`.
pub type Position = u8;
/// Penalty points, per trick, per hand or cumulative.
pub type Points = u16;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats in the ring.
pub const N: usize = 4;
/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 13;
/// Cards each seat passes before the tricks phase.
pub const PASS_SIZE: usize = 3;
/// Tricks in one hand.
pub const TRICKS: usize = 13;
/// Penalty points available in one hand. Taking all of them shoots the moon.
pub const MOON: Points = 26;
/// The game ends once any cumulative total reaches this.
pub const GAME_LIMIT: Points = 100;
/// Seat that deals and keeps score unless configured otherwise.
pub const ARBITER: Position = 0;

// ============================================================================
// WIRE PARAMETERS
// ============================================================================
/// Destination id addressing every seat.
pub const BROADCAST: u8 = 0xFF;
/// Fixed header: kind, origin, destination, sequence, length.
pub const HEADER_SIZE: usize = 5;
/// Largest payload a one-byte length can describe.
pub const MAX_PAYLOAD: usize = u8::MAX as usize;
/// Seat `i` listens on `BASE_PORT + i` unless configured otherwise.
pub const BASE_PORT: u16 = 5000;

// ============================================================================
// TIMING
// ============================================================================
/// Receiver wake-up interval for liveness checks.
pub const RECV_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(1);
/// Upper bound on a single card selection before the default is substituted.
pub const DECISION_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
/// Selection attempts before falling back to the default choice.
pub const DECISION_ATTEMPTS: usize = 3;
/// Capacity of the receiver → processor queue.
pub const QUEUE_CAPACITY: usize = 256;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger already initialized: {}", e);
    }
}

/// Register Ctrl+C handler for immediate termination.
/// There is no graceful seat-removal protocol, so the ring simply stalls.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, leaving the ring");
            std::process::exit(0);
        }
    });
}
