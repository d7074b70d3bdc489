use super::Link;
use crate::N;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Mutex;
use tokio::sync::mpsc::*;

/// An in-process [`Link`]; [`MemoryLink::ring`] wires four of them in
/// ring order. Delivery is reliable and ordered, unlike UDP.
pub struct MemoryLink {
    inbox: Mutex<UnboundedReceiver<Bytes>>,
    next: UnboundedSender<Bytes>,
}

impl MemoryLink {
    /// One link per seat, seat `i` sending to seat `i + 1`.
    pub fn ring() -> Vec<MemoryLink> {
        let (txs, rxs): (Vec<_>, Vec<_>) = (0..N).map(|_| unbounded_channel()).unzip();
        rxs.into_iter()
            .enumerate()
            .map(|(i, rx)| MemoryLink {
                inbox: Mutex::new(rx),
                next: txs[(i + 1) % N].clone(),
            })
            .collect()
    }
}

#[async_trait]
impl Link for MemoryLink {
    async fn recv(&self) -> std::io::Result<Bytes> {
        self.inbox
            .lock()
            .await
            .recv()
            .await
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::ConnectionAborted))
    }
    async fn send(&self, bytes: &[u8]) -> std::io::Result<()> {
        self.next
            .send(Bytes::copy_from_slice(bytes))
            .map_err(|_| std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ring_order() {
        let ring = MemoryLink::ring();
        for i in 0..N {
            ring[i].send(&[i as u8]).await.unwrap();
        }
        for i in 0..N {
            let got = ring[(i + 1) % N].recv().await.unwrap();
            assert_eq!(&got[..], &[i as u8]);
        }
    }
}
