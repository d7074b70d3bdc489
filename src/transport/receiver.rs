use super::Link;
use super::link::is_closed;
use crate::Position;
use crate::RECV_TIMEOUT;
use crate::protocol::Frame;
use crate::protocol::Kind;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Whether `seat` must process `frame`: addressed to it, broadcast, or a
/// pass the arbiter tracks on everyone's behalf.
pub fn relevant(seat: Position, arbiter: Position, frame: &Frame) -> bool {
    frame.dest.reaches(seat) || (seat == arbiter && frame.kind == Kind::Pass)
}

/// Receive side of a seat's endpoint.
///
/// - decodes each datagram, dropping anything malformed
/// - retires frames this seat originated once they complete the lap
/// - forwards every other frame to the successor, byte for byte
/// - queues relevant frames for the processor
///
/// Never touches game state.
pub struct Receiver {
    seat: Position,
    arbiter: Position,
    link: Arc<dyn Link>,
    queue: mpsc::Sender<Frame>,
}

impl Receiver {
    pub fn spawn(
        seat: Position,
        arbiter: Position,
        link: Arc<dyn Link>,
        capacity: usize,
    ) -> mpsc::Receiver<Frame> {
        let (tx, rx) = mpsc::channel(capacity);
        let receiver = Self {
            seat,
            arbiter,
            link,
            queue: tx,
        };
        tokio::spawn(receiver.run());
        rx
    }
    async fn run(self) {
        log::debug!("[ring P{}] receiver started", self.seat);
        loop {
            if self.queue.is_closed() {
                break;
            }
            match tokio::time::timeout(RECV_TIMEOUT, self.link.recv()).await {
                Err(_) => continue,
                Ok(Err(ref e)) if is_closed(e) => break,
                Ok(Err(e)) => log::warn!("[ring P{}] receive failed: {}", self.seat, e),
                Ok(Ok(bytes)) => {
                    if !self.accept(&bytes).await {
                        break;
                    }
                }
            }
        }
        log::debug!("[ring P{}] receiver stopped", self.seat);
    }
    /// Returns false once the processor has gone away.
    async fn accept(&self, bytes: &[u8]) -> bool {
        let frame = match Frame::decode(bytes) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("[ring P{}] dropped datagram: {}", self.seat, e);
                return true;
            }
        };
        if frame.origin == self.seat {
            log::trace!("[ring P{}] lap complete {}", self.seat, frame);
            return true;
        }
        if let Err(e) = self.link.send(bytes).await {
            log::warn!("[ring P{}] forward failed: {}", self.seat, e);
        }
        match relevant(self.seat, self.arbiter, &frame) {
            true => self.queue.send(frame).await.is_ok(),
            false => true,
        }
    }
}
