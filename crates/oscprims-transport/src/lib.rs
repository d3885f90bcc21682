//! Connectionless datagram transport for OSC messages.
//!
//! OSC over UDP is one message per datagram: no framing, no stream, no
//! delivery guarantee. This crate owns the socket side of that contract:
//! - [`UdpSender`] binds an ephemeral local port and sends to one fixed target
//! - [`DatagramSink`] is the seam encoders write finished messages into
//! - `AsyncUdpSender` does the same on tokio (behind the `async` feature)
//!
//! Nothing here knows the OSC wire format. Callers hand over finished bytes.

pub mod error;
pub mod traits;
pub mod udp;

#[cfg(feature = "async")]
pub mod async_udp;

pub use error::{Result, TransportError};
pub use traits::DatagramSink;
pub use udp::{resolve_target, UdpSender, DEFAULT_HOST, DEFAULT_PORT, MAX_DATAGRAM_SIZE};

#[cfg(feature = "async")]
pub use async_udp::AsyncUdpSender;
