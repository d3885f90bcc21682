//! Open Sound Control 1.0 message encoding.
//!
//! An OSC message is three 4-byte aligned sections:
//! - the address pattern, NUL-terminated and zero-padded
//! - the type-tag string (`,` then one tag per argument), NUL-terminated and zero-padded
//! - each argument payload in order, big-endian, strings and blobs zero-padded
//!
//! Encoding writes into a caller-owned buffer and never past its end.
//! Inputs are fully validated before the first byte is written.

pub mod address;
pub mod arg;
pub mod encoder;
pub mod error;
pub mod message;
pub mod tag;
pub mod writer;

pub use address::validate_address;
pub use arg::OscArg;
pub use encoder::{encode_message, encode_to_bytes, encoded_len, pad4};
pub use error::{MessageError, Result};
pub use message::OscMessage;
pub use tag::{parse_type_tags, TypeTag};
pub use writer::{MessageWriter, WriterConfig, DEFAULT_BUFFER_CAPACITY};
