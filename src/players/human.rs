use super::Strategy;
use crate::PASS_SIZE;
use crate::cards::Card;
use crate::cards::Suit;
use crate::coordinator::Event;
use crate::coordinator::Snapshot;
use crate::rules::Moon;
use colored::Colorize;
use dialoguer::MultiSelect;
use dialoguer::Select;

/// One prompt owns the terminal at a time.
static TERMINAL: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Interactive player at the terminal.
///
/// Prompts run on the blocking pool so the seat's runtime keeps
/// forwarding frames while the human thinks. A blocking prompt cannot be
/// cancelled: when a decision times out, its prompt stays on screen and
/// the answer is discarded. The next prompt waits until then instead of
/// reading stdin alongside it.
#[derive(Debug, Default)]
pub struct Human;

#[async_trait::async_trait]
impl Strategy for Human {
    async fn pass(&mut self, snapshot: &Snapshot) -> Vec<Card> {
        let cards = snapshot.hand.iter().collect::<Vec<_>>();
        let labels = cards.iter().map(paint).collect::<Vec<_>>();
        let prompt = format!(
            "Pass {} cards {}",
            PASS_SIZE,
            snapshot.direction.map(|d| d.to_string()).unwrap_or_default()
        );
        let picks = ask(move || {
            MultiSelect::new()
                .with_prompt(prompt)
                .report(false)
                .items(&labels)
                .interact()
                .unwrap_or_default()
        })
        .await
        .unwrap_or_default();
        picks.into_iter().filter_map(|i| cards.get(i).copied()).collect()
    }
    async fn play(&mut self, snapshot: &Snapshot, legal: &[Card]) -> Card {
        let cards = legal.to_vec();
        let labels = cards.iter().map(paint).collect::<Vec<_>>();
        let prompt = match snapshot.trick.is_empty() {
            true => String::from("Lead"),
            false => format!("Trick: {}", snapshot.trick),
        };
        let pick = ask(move || {
            Select::new()
                .with_prompt(prompt)
                .report(false)
                .items(&labels)
                .default(0)
                .interact()
                .unwrap_or(0)
        })
        .await
        .unwrap_or(0);
        cards
            .get(pick)
            .or_else(|| cards.first())
            .copied()
            .unwrap_or(Card::TWO_OF_CLUBS)
    }
    async fn moon(&mut self) -> Moon {
        let labels = ["Everyone else takes 26", "I take 26, everyone else 0"];
        let pick = ask(move || {
            Select::new()
                .with_prompt("You shot the moon!")
                .report(false)
                .items(&labels)
                .default(0)
                .interact()
                .unwrap_or(0)
        })
        .await
        .unwrap_or(0);
        match pick {
            1 => Moon::Shooter,
            _ => Moon::Others,
        }
    }
    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Dealt(hand) => println!(
                "Your cards: {}",
                hand.iter().map(|c| paint(&c)).collect::<Vec<_>>().join(" ")
            ),
            Event::Token(_) => {}
            event => println!("{}", event),
        }
    }
}

/// Runs a blocking prompt once the terminal is free.
async fn ask<T, F>(prompt: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let _turn = TERMINAL.lock().unwrap_or_else(|e| e.into_inner());
        prompt()
    })
    .await
    .ok()
}

fn paint(card: &Card) -> String {
    match card.suit() {
        Suit::H | Suit::D => card.to_string().red().to_string(),
        Suit::C | Suit::S => card.to_string().bold().to_string(),
    }
}
