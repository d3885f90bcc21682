//! Address pattern validation.

use crate::error::{MessageError, Result};

/// Characters with pattern-matching meaning on the wire.
pub const RESERVED_CHARS: &[u8] = b"#*,?[]{}";

/// Validate an OSC address pattern for sending.
///
/// The address must be non-empty, start with `/`, and contain only printable
/// ASCII outside of whitespace and [`RESERVED_CHARS`].
pub fn validate_address(address: &str) -> Result<()> {
    let invalid = |reason| MessageError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    if address.is_empty() {
        return Err(invalid("address is empty"));
    }
    if !address.starts_with('/') {
        return Err(invalid("address must start with '/'"));
    }

    for byte in address.bytes() {
        if !byte.is_ascii() {
            return Err(invalid("address must be ASCII"));
        }
        if byte.is_ascii_whitespace() {
            return Err(invalid("address must not contain whitespace"));
        }
        if byte.is_ascii_control() {
            return Err(invalid("address must not contain control characters"));
        }
        if RESERVED_CHARS.contains(&byte) {
            return Err(invalid("address contains a reserved character"));
        }
    }

    Ok(())
}
