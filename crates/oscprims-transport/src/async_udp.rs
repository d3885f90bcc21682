use std::net::SocketAddr;

use tokio::net::{lookup_host, ToSocketAddrs, UdpSocket};
use tracing::{debug, trace};

use crate::error::{Result, TransportError};
use crate::udp::unspecified_for;

/// Async UDP datagram sender with a fixed destination.
#[derive(Debug)]
pub struct AsyncUdpSender {
    socket: UdpSocket,
    target: SocketAddr,
}

impl AsyncUdpSender {
    /// Resolve `target` and bind an ephemeral local socket for it.
    pub async fn connect(target: impl ToSocketAddrs + std::fmt::Display) -> Result<Self> {
        let label = target.to_string();
        let target = lookup_host(target)
            .await
            .map_err(|source| TransportError::Resolve {
                target: label.clone(),
                source,
            })?
            .next()
            .ok_or(TransportError::NoAddress { target: label })?;
        Self::bind(unspecified_for(&target), target).await
    }

    /// Bind to an explicit local address and send to `target`.
    pub async fn bind(local: SocketAddr, target: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(local)
            .await
            .map_err(|source| TransportError::Bind {
                addr: local,
                source,
            })?;
        debug!(local = %local, target = %target, "async udp sender bound");
        Ok(Self { socket, target })
    }

    /// Send one datagram to the target.
    pub async fn send(&self, datagram: &[u8]) -> Result<usize> {
        let sent = self
            .socket
            .send_to(datagram, self.target)
            .await
            .map_err(|source| TransportError::Send {
                target: self.target,
                source,
            })?;

        if sent != datagram.len() {
            return Err(TransportError::Truncated {
                sent,
                len: datagram.len(),
            });
        }

        trace!(target = %self.target, bytes = sent, "datagram sent");
        Ok(sent)
    }

    /// The destination address.
    pub fn target(&self) -> SocketAddr {
        self.target
    }

    /// The bound local address.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr().map_err(Into::into)
    }
}
