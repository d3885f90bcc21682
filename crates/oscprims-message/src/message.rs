use bytes::Bytes;

use crate::arg::OscArg;
use crate::encoder::{encode_message, encode_to_bytes, encoded_len};
use crate::error::Result;

/// An owned OSC message.
///
/// The type-tag string is derived from the arguments, so tags and values
/// cannot drift apart. Booleans appear in the tag string only.
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    /// The address pattern, e.g. `/chatbox/input`.
    pub address: String,
    /// Arguments in wire order, booleans included.
    pub args: Vec<OscArg>,
}

impl OscMessage {
    /// Create a message with no arguments.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument (builder style).
    pub fn with_arg(mut self, arg: impl Into<OscArg>) -> Self {
        self.push(arg);
        self
    }

    /// Append an argument.
    pub fn push(&mut self, arg: impl Into<OscArg>) {
        self.args.push(arg.into());
    }

    /// The type-tag string, without the leading comma.
    pub fn type_tags(&self) -> String {
        self.args.iter().map(|arg| arg.type_tag().as_char()).collect()
    }

    /// Arguments that carry payload bytes.
    pub fn payload_args(&self) -> Vec<OscArg> {
        self.args
            .iter()
            .filter(|arg| arg.type_tag().has_payload())
            .cloned()
            .collect()
    }

    /// The exact encoded size of this message.
    pub fn encoded_len(&self) -> Result<usize> {
        encoded_len(&self.address, &self.type_tags(), &self.payload_args())
    }

    /// Encode into `dst`, returning the number of bytes written.
    pub fn encode_into(&self, dst: &mut [u8]) -> Result<usize> {
        encode_message(dst, &self.address, &self.type_tags(), &self.payload_args())
    }

    /// Encode into a newly allocated buffer.
    pub fn to_bytes(&self) -> Result<Bytes> {
        encode_to_bytes(&self.address, &self.type_tags(), &self.payload_args())
    }
}
