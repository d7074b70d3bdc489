use super::Link;
use super::relevant;
use crate::Position;
use crate::protocol::Frame;
use crate::protocol::Message;
use crate::protocol::Sequence;
use crate::protocol::Target;
use std::sync::Arc;

/// Send side of a seat's endpoint. Owns the seat's sequence counter.
pub struct Outbox {
    seat: Position,
    arbiter: Position,
    link: Arc<dyn Link>,
    seq: Sequence,
}

impl Outbox {
    pub fn new(seat: Position, arbiter: Position, link: Arc<dyn Link>) -> Self {
        Self {
            seat,
            arbiter,
            link,
            seq: Sequence::new(),
        }
    }
    /// Encodes and transmits a message originated by this seat.
    ///
    /// Returns the frame when this seat must also process it; the ring
    /// will not deliver it back.
    pub async fn send(&mut self, message: &Message, dest: Target) -> Option<Frame> {
        let frame = Frame::new(
            message.kind(),
            self.seat,
            dest,
            self.seq.next(),
            message.payload(),
        );
        match frame.encode() {
            Ok(bytes) => {
                log::trace!("[ring P{}] send {}", self.seat, frame);
                if let Err(e) = self.link.send(&bytes).await {
                    log::warn!("[ring P{}] send failed: {}", self.seat, e);
                }
            }
            Err(e) => {
                log::error!("[ring P{}] cannot encode {}: {}", self.seat, message, e);
                return None;
            }
        }
        relevant(self.seat, self.arbiter, &frame).then_some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryLink;

    #[tokio::test]
    async fn loopback_only_when_relevant() {
        let mut ring = MemoryLink::ring().into_iter();
        let zero = ring.next().unwrap();
        let one = ring.next().unwrap();
        let mut outbox = Outbox::new(0, 0, Arc::new(zero));
        let start = outbox.send(&Message::Start, Target::Broadcast).await;
        assert_eq!(start.map(|f| f.seq), Some(0));
        let token = outbox.send(&Message::Token(2), Target::Seat(2)).await;
        assert!(token.is_none());
        let first = Frame::decode(&one.recv().await.unwrap()).unwrap();
        let second = Frame::decode(&one.recv().await.unwrap()).unwrap();
        assert_eq!((first.seq, second.seq), (0, 1));
        assert_eq!(Message::try_from(&second), Ok(Message::Token(2)));
    }
}
