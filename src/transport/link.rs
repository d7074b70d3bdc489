use async_trait::async_trait;
use bytes::Bytes;

/// One seat's datagram endpoint: receives from its predecessor, sends to
/// its successor. Ring order is fixed when the link is built.
#[async_trait]
pub trait Link: Send + Sync {
    /// Waits for the next datagram.
    async fn recv(&self) -> std::io::Result<Bytes>;
    /// Transmits a datagram to the successor.
    async fn send(&self, bytes: &[u8]) -> std::io::Result<()>;
}

/// Whether a receive error means the endpoint is gone for good.
pub(crate) fn is_closed(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::BrokenPipe | std::io::ErrorKind::ConnectionAborted
    )
}
