use serde::Serialize;

/// Where a seat is in the life of a hand.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    Waiting,
    Dealt,
    Passing,
    Tricks,
    HandDone,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::Waiting => write!(f, "waiting"),
            Phase::Dealt => write!(f, "dealt"),
            Phase::Passing => write!(f, "passing"),
            Phase::Tricks => write!(f, "tricks"),
            Phase::HandDone => write!(f, "hand done"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}
