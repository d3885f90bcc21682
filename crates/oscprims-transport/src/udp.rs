use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{Result, TransportError};
use crate::traits::DatagramSink;

/// Default destination host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default destination port (VRChat's OSC input port).
pub const DEFAULT_PORT: u16 = 9000;

/// Largest payload a single IPv4 UDP datagram can carry.
pub const MAX_DATAGRAM_SIZE: usize = 65_507;

/// UDP datagram sender with a fixed destination.
///
/// The local socket is bound to the unspecified address of the target's
/// family on an ephemeral port. The socket is closed on drop.
#[derive(Debug)]
pub struct UdpSender {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpSender {
    /// Resolve `target` and bind an ephemeral local socket for it.
    ///
    /// When `target` resolves to several addresses, the first one is used.
    pub fn connect(target: impl ToSocketAddrs + std::fmt::Display) -> Result<Self> {
        let label = target.to_string();
        let target = first_addr(target, &label)?;
        Self::bind(unspecified_for(&target), target)
    }

    /// Bind to an explicit local address and send to `target`.
    pub fn bind(local: SocketAddr, target: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(local).map_err(|source| TransportError::Bind {
            addr: local,
            source,
        })?;
        debug!(local = %local, target = %target, "udp sender bound");
        Ok(Self { socket, target })
    }

    /// Send one datagram to the target.
    ///
    /// Returns the number of bytes handed to the OS, which always equals
    /// `datagram.len()` on success.
    pub fn send(&self, datagram: &[u8]) -> Result<usize> {
        let sent = loop {
            match self.socket.send_to(datagram, self.target) {
                Ok(n) => break n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(TransportError::Send {
                        target: self.target,
                        source,
                    })
                }
            }
        };

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

    /// Set write timeout on the underlying socket.
    pub fn set_write_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.socket.set_write_timeout(timeout).map_err(Into::into)
    }

    /// Borrow the underlying socket.
    pub fn socket(&self) -> &UdpSocket {
        &self.socket
    }
}

impl DatagramSink for UdpSender {
    fn send_datagram(&mut self, datagram: &[u8]) -> Result<()> {
        self.send(datagram).map(|_| ())
    }
}

/// Resolve a host and port into a single socket address.
pub fn resolve_target(host: &str, port: u16) -> Result<SocketAddr> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }
    first_addr((host, port), &format!("{host}:{port}"))
}

pub(crate) fn first_addr(target: impl ToSocketAddrs, label: &str) -> Result<SocketAddr> {
    let mut addrs = target.to_socket_addrs().map_err(|source| TransportError::Resolve {
        target: label.to_string(),
        source,
    })?;
    addrs.next().ok_or_else(|| TransportError::NoAddress {
        target: label.to_string(),
    })
}

pub(crate) fn unspecified_for(target: &SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback_receiver() -> UdpSocket {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        receiver
    }

    #[test]
    fn sends_one_datagram_to_target() {
        let receiver = loopback_receiver();
        let sender = UdpSender::connect(receiver.local_addr().unwrap()).unwrap();

        let sent = sender.send(b"/ping\0\0\0,\0\0\0").unwrap();
        assert_eq!(sent, 12);

        let mut buf = [0u8; 64];
        let (n, from) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"/ping\0\0\0,\0\0\0");
        assert_eq!(from.port(), sender.local_addr().unwrap().port());
    }

    #[test]
    fn datagrams_stay_separate() {
        let receiver = loopback_receiver();
        let mut sender = UdpSender::connect(receiver.local_addr().unwrap()).unwrap();

        sender.send_datagram(b"first").unwrap();
        sender.send_datagram(b"second").unwrap();

        let mut buf = [0u8; 64];
        let (n, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"first");
        let (n, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"second");
    }

    #[test]
    fn binds_unspecified_ephemeral_port() {
        let sender = UdpSender::connect(format!("127.0.0.1:{DEFAULT_PORT}")).unwrap();
        let local = sender.local_addr().unwrap();
        assert!(local.ip().is_unspecified());
        assert_ne!(local.port(), 0);
        assert_eq!(sender.target().port(), DEFAULT_PORT);
    }

    #[test]
    fn resolve_target_accepts_ip_literals() {
        let addr = resolve_target("127.0.0.1", 9000).unwrap();
        assert_eq!(addr, "127.0.0.1:9000".parse().unwrap());

        let addr = resolve_target("::1", 9001).unwrap();
        assert_eq!(addr, "[::1]:9001".parse().unwrap());
    }

    #[test]
    fn resolve_target_reports_unresolvable_host() {
        let err = resolve_target("definitely-not-a-host.invalid", 9000).unwrap_err();
        assert!(matches!(
            err,
            TransportError::Resolve { .. } | TransportError::NoAddress { .. }
        ));
    }

    #[test]
    fn connect_error_names_target_verbatim() {
        let err = UdpSender::connect("definitely-not-a-host.invalid:9000").unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("definitely-not-a-host.invalid:9000"),
            "{message}"
        );
        assert!(!message.contains('"'), "{message}");
    }

    #[test]
    fn unspecified_matches_target_family() {
        let v4: SocketAddr = "10.0.0.1:9000".parse().unwrap();
        let v6: SocketAddr = "[fe80::1]:9000".parse().unwrap();
        assert!(unspecified_for(&v4).is_ipv4());
        assert!(unspecified_for(&v6).is_ipv6());
        assert_eq!(unspecified_for(&v4).port(), 0);
    }

    #[test]
    fn bind_failure_reports_address() {
        let taken = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();
        let err = UdpSender::bind(addr, addr).unwrap_err();
        assert!(matches!(err, TransportError::Bind { addr: a, .. } if a == addr));
    }

    #[test]
    fn write_timeout_applies() {
        let sender = UdpSender::connect("127.0.0.1:9000").unwrap();
        assert!(sender
            .set_write_timeout(Some(Duration::from_millis(10)))
            .is_ok());
    }
}
