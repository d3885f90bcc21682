use crate::tag::TypeTag;

/// Errors that can occur while encoding or sending an OSC message.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The address pattern is malformed.
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress {
        address: String,
        reason: &'static str,
    },

    /// The type-tag string contains an unsupported character.
    #[error("invalid type tag {tag:?} at position {position}")]
    InvalidTypeTag { tag: char, position: usize },

    /// The number of arguments does not match the payload-bearing tags.
    #[error("argument count mismatch (tags expect {expected}, got {actual})")]
    ArgumentCountMismatch { expected: usize, actual: usize },

    /// An argument's type does not match its tag.
    #[error("argument {index} type mismatch (tag {expected} expects {}, got {actual})", .expected.type_name())]
    ArgumentTypeMismatch {
        index: usize,
        expected: TypeTag,
        actual: &'static str,
    },

    /// A string argument contains a NUL byte.
    #[error("string argument {index} contains a NUL byte")]
    InvalidString { index: usize },

    /// A blob argument exceeds the wire format's size field.
    #[error("argument {index} payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { index: usize, size: usize, max: usize },

    /// The encoded message does not fit into the destination buffer.
    #[error("buffer too small ({required} bytes required, capacity {capacity})")]
    BufferTooSmall { required: usize, capacity: usize },

    /// The transport failed to send the encoded message.
    #[error("transport error: {0}")]
    Transport(#[from] oscprims_transport::TransportError),
}

pub type Result<T> = std::result::Result<T, MessageError>;
