//! Seat Binary
//!
//! Joins one seat to a four-seat Hearts ring over UDP. Start all four
//! seats; the arbiter deals once its warm-up delay has passed.
//!
//! Usage: seat <SEAT> [--arbiter N] [--port P] [--next HOST:PORT] [--human]
//!        [--seed S] [--decision-timeout SECS] [--verbose]

use clap::Parser;
use heartring::node::Node;
use heartring::node::RingConfig;
use heartring::players::Heuristic;
use heartring::players::Human;
use heartring::players::Strategy;
use heartring::transport::UdpLink;
use heartring::*;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Play one seat of a Hearts token ring", long_about = None)]
struct Args {
    /// Seat id, 0 to 3
    #[arg(value_parser = clap::value_parser!(u8).range(0..4))]
    seat: u8,
    /// Seat that deals and keeps score
    #[arg(long, default_value_t = ARBITER, value_parser = clap::value_parser!(u8).range(0..4))]
    arbiter: u8,
    /// Local UDP port [default: 5000 + seat]
    #[arg(long)]
    port: Option<u16>,
    /// Successor address [default: 127.0.0.1:(5000 + seat + 1 mod 4)]
    #[arg(long)]
    next: Option<String>,
    /// Prompt for every decision instead of playing automatically
    #[arg(long)]
    human: bool,
    /// Shuffle seed, honoured by the arbiter
    #[arg(long)]
    seed: Option<u64>,
    /// Seconds allowed for each decision
    #[arg(long, default_value_t = DECISION_TIMEOUT.as_secs())]
    decision_timeout: u64,
    /// Debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> RingConfig {
        let mut config = RingConfig::local(self.seat)
            .with_decision(Duration::from_secs(self.decision_timeout));
        config.arbiter = self.arbiter;
        config.seed = self.seed;
        if let Some(port) = self.port {
            config.bind = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        }
        if let Some(ref next) = self.next {
            config.successor = next.clone();
        }
        config
    }
    fn strategy(&self) -> Box<dyn Strategy> {
        match self.human {
            true => Box::new(Human),
            false => Box::new(Heuristic),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    kys();
    let config = args.config();
    let link = UdpLink::bind(config.bind, &config.successor).await?;
    log::info!(
        "[seat P{}] listening on {}, next {}",
        config.seat,
        link.local_addr()?,
        link.successor()
    );
    let ledger = Node::new(config, Arc::new(link), args.strategy())
        .run()
        .await?;
    if let Some(result) = ledger.result {
        log::info!("P{} wins, final totals {:?}", result.winner, result.totals);
    }
    println!("{}", ledger.to_json());
    Ok(())
}
