use crate::N;
use crate::Points;
use crate::Position;
use crate::cards::Hand;
use crate::rules::Direction;
use crate::rules::Trick;
use serde::Serialize;
use super::Phase;

/// Read-only view of one seat's state, handed to strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub seat: Position,
    pub hand_number: usize,
    pub phase: Phase,
    pub direction: Option<Direction>,
    pub token: Option<Position>,
    pub hand: Hand,
    pub trick: Trick,
    pub hearts_broken: bool,
    pub tricks: usize,
    pub taken: [Points; N],
    pub totals: [Points; N],
}

impl Snapshot {
    pub fn is_first_trick(&self) -> bool {
        self.tricks == 0
    }
}
