use std::net::SocketAddr;

/// Errors that can occur in datagram transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The destination could not be resolved.
    #[error("failed to resolve {target}: {source}")]
    Resolve {
        target: String,
        source: std::io::Error,
    },

    /// The destination resolved to zero addresses.
    #[error("no socket address found for {target}")]
    NoAddress { target: String },

    /// Failed to bind the local socket.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The datagram could not be handed to the network stack.
    #[error("failed to send to {target}: {source}")]
    Send {
        target: SocketAddr,
        source: std::io::Error,
    },

    /// The OS accepted fewer bytes than the datagram holds.
    #[error("datagram truncated ({sent} of {len} bytes sent)")]
    Truncated { sent: usize, len: usize },

    /// An I/O error occurred on the socket.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
