use crate::protocol::GameResult;
use crate::protocol::HandSummary;
use crate::protocol::Message;
use crate::protocol::TrickSummary;
use serde::Serialize;

/// Everything the arbiter announced, as one seat saw it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    pub tricks: Vec<TrickSummary>,
    pub hands: Vec<HandSummary>,
    pub result: Option<GameResult>,
}

impl Ledger {
    pub fn record(&mut self, message: &Message) {
        match message {
            Message::Trick(summary) => self.tricks.push(*summary),
            Message::Summary(summary) => self.hands.push(*summary),
            Message::GameOver(result) => self.result = Some(*result),
            _ => {}
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
