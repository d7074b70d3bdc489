use super::Link;
use crate::HEADER_SIZE;
use crate::MAX_PAYLOAD;
use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// A [`Link`] over a bound UDP socket.
///
/// Datagrams are accepted from anyone; only the successor address is
/// fixed.
pub struct UdpLink {
    socket: UdpSocket,
    next: SocketAddr,
}

impl UdpLink {
    /// Binds `bind` and resolves the successor, which may be a host name.
    pub async fn bind(bind: SocketAddr, next: &str) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind(bind)
            .await
            .with_context(|| format!("binding {}", bind))?;
        let next = tokio::net::lookup_host(next)
            .await
            .with_context(|| format!("resolving successor {}", next))?
            .next()
            .with_context(|| format!("successor {} has no address", next))?;
        log::debug!("[udp] bound {} → {}", socket.local_addr()?, next);
        Ok(Self { socket, next })
    }
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }
    pub fn successor(&self) -> SocketAddr {
        self.next
    }
}

#[async_trait]
impl Link for UdpLink {
    async fn recv(&self) -> std::io::Result<Bytes> {
        let mut buf = [0u8; HEADER_SIZE + MAX_PAYLOAD];
        let (n, from) = self.socket.recv_from(&mut buf).await?;
        log::trace!("[udp] {} bytes from {}", n, from);
        Ok(Bytes::copy_from_slice(&buf[..n]))
    }
    async fn send(&self, bytes: &[u8]) -> std::io::Result<()> {
        self.socket.send_to(bytes, self.next).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loopback_pair() {
        let any: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let b = UdpLink::bind(any, "127.0.0.1:9").await.unwrap();
        let a = UdpLink::bind(any, &b.local_addr().unwrap().to_string())
            .await
            .unwrap();
        a.send(&[2, 0, 0xFF, 0, 0]).await.unwrap();
        assert_eq!(&b.recv().await.unwrap()[..], &[2, 0, 0xFF, 0, 0]);
    }
}
