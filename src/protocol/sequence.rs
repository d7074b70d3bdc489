/// Per-seat frame numbering: increments on every originated frame and
/// wraps at 256. Forwarded frames keep their origin's number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sequence(u8);

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns the current number and advances.
    pub fn next(&mut self) -> u8 {
        let n = self.0;
        self.0 = self.0.wrapping_add(1);
        n
    }
    pub fn peek(&self) -> u8 {
        self.0
    }
}
