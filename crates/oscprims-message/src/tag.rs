//! OSC type tags.

use std::fmt;

use crate::error::{MessageError, Result};

/// A supported OSC 1.0 type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `i`: 32-bit big-endian two's-complement integer.
    Int32,
    /// `f`: 32-bit big-endian IEEE-754 float.
    Float32,
    /// `s`: NUL-terminated string, zero-padded to 4 bytes.
    String,
    /// `b`: 32-bit size, then bytes, zero-padded to 4 bytes.
    Blob,
    /// `T`: boolean true, no payload.
    True,
    /// `F`: boolean false, no payload.
    False,
}

impl TypeTag {
    /// Parse a single tag character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::Int32),
            'f' => Some(Self::Float32),
            's' => Some(Self::String),
            'b' => Some(Self::Blob),
            'T' => Some(Self::True),
            'F' => Some(Self::False),
            _ => None,
        }
    }

    /// The wire character for this tag.
    pub fn as_char(self) -> char {
        match self {
            Self::Int32 => 'i',
            Self::Float32 => 'f',
            Self::String => 's',
            Self::Blob => 'b',
            Self::True => 'T',
            Self::False => 'F',
        }
    }

    /// Whether an argument value and payload bytes follow this tag.
    pub fn has_payload(self) -> bool {
        !matches!(self, Self::True | Self::False)
    }

    /// Human-readable type name, used in error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::String => "string",
            Self::Blob => "blob",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.as_char())
    }
}

/// Parse a type-tag string (without the leading comma).
pub fn parse_type_tags(tags: &str) -> Result<Vec<TypeTag>> {
    tags.chars()
        .enumerate()
        .map(|(position, tag)| {
            TypeTag::from_char(tag).ok_or(MessageError::InvalidTypeTag { tag, position })
        })
        .collect()
}
