use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::address::validate_address;
use crate::arg::OscArg;
use crate::error::{MessageError, Result};
use crate::tag::{parse_type_tags, TypeTag};

/// Largest blob the 32-bit signed size field can describe.
pub const MAX_BLOB_SIZE: usize = i32::MAX as usize;

/// Round `len` up to the next multiple of 4.
pub const fn pad4(len: usize) -> usize {
    (len + 3) & !3
}

/// Wire size of a NUL-terminated, zero-padded string of `len` bytes.
const fn padded_str_size(len: usize) -> usize {
    pad4(len + 1)
}

/// Compute the exact encoded size of a message without writing it.
///
/// Runs the same validation as [`encode_message`], so a successful result
/// means encoding into a buffer of at least this size will succeed.
pub fn encoded_len(address: &str, type_tags: &str, args: &[OscArg]) -> Result<usize> {
    plan(address, type_tags, args)
}

/// Encode an OSC message into `dst`.
///
/// `type_tags` lists one tag per argument without the leading comma. `args`
/// holds one value per payload-bearing tag, in order; `T` and `F` consume
/// no value. Returns the number of bytes written.
///
/// Wire format:
/// ```text
/// ┌──────────────────┬───────────────────┬──────────────────────────┐
/// │ address \0 pad   │ , tags \0 pad     │ payloads (big-endian)    │
/// │ (multiple of 4)  │ (multiple of 4)   │ (each a multiple of 4)   │
/// └──────────────────┴───────────────────┴──────────────────────────┘
/// ```
///
/// On error `dst` is left untouched. On success `dst[..n]` is zero-filled
/// before writing so padding is always zero, and `dst[n..]` is untouched.
pub fn encode_message(
    dst: &mut [u8],
    address: &str,
    type_tags: &str,
    args: &[OscArg],
) -> Result<usize> {
    let required = plan(address, type_tags, args)?;
    if required > dst.len() {
        return Err(MessageError::BufferTooSmall {
            required,
            capacity: dst.len(),
        });
    }

    write(&mut dst[..required], address, type_tags, args);
    trace!(address, type_tags, bytes = required, "encoded osc message");
    Ok(required)
}

/// Encode an OSC message into a newly allocated buffer of exactly the
/// required size.
pub fn encode_to_bytes(address: &str, type_tags: &str, args: &[OscArg]) -> Result<Bytes> {
    let required = plan(address, type_tags, args)?;
    let mut buf = BytesMut::zeroed(required);
    write(&mut buf, address, type_tags, args);
    trace!(address, type_tags, bytes = required, "encoded osc message");
    Ok(buf.freeze())
}

/// Validate all inputs and return the encoded size.
fn plan(address: &str, type_tags: &str, args: &[OscArg]) -> Result<usize> {
    validate_address(address)?;
    let tags = parse_type_tags(type_tags)?;

    let expected = tags.iter().filter(|tag| tag.has_payload()).count();
    if args.len() != expected {
        return Err(MessageError::ArgumentCountMismatch {
            expected,
            actual: args.len(),
        });
    }

    let mut size = padded_str_size(address.len()) + padded_str_size(1 + type_tags.len());
    let payload_tags = tags.into_iter().filter(|tag| tag.has_payload());
    for (index, (tag, arg)) in payload_tags.zip(args).enumerate() {
        if !arg.matches(tag) {
            return Err(MessageError::ArgumentTypeMismatch {
                index,
                expected: tag,
                actual: arg.type_name(),
            });
        }
        size += payload_size(index, arg)?;
    }

    Ok(size)
}

fn payload_size(index: usize, arg: &OscArg) -> Result<usize> {
    match arg {
        OscArg::Int(_) | OscArg::Float(_) => Ok(4),
        OscArg::Str(s) => {
            if s.as_bytes().contains(&0) {
                return Err(MessageError::InvalidString { index });
            }
            Ok(padded_str_size(s.len()))
        }
        OscArg::Blob(b) => {
            if b.len() > MAX_BLOB_SIZE {
                return Err(MessageError::PayloadTooLarge {
                    index,
                    size: b.len(),
                    max: MAX_BLOB_SIZE,
                });
            }
            Ok(4 + pad4(b.len()))
        }
        OscArg::Bool(_) => Ok(0),
    }
}

/// Write a planned message. `out` must be exactly the planned size.
fn write(out: &mut [u8], address: &str, type_tags: &str, args: &[OscArg]) {
    out.fill(0);
    let mut buf = out;

    put_padded(&mut buf, &[address.as_bytes()]);
    put_padded(&mut buf, &[b",", type_tags.as_bytes()]);

    for arg in args {
        match arg {
            OscArg::Int(v) => buf.put_i32(*v),
            OscArg::Float(v) => buf.put_f32(*v),
            OscArg::Str(s) => put_padded(&mut buf, &[s.as_bytes()]),
            OscArg::Blob(b) => {
                buf.put_i32(b.len() as i32);
                buf.put_slice(b);
                buf.put_bytes(0, pad4(b.len()) - b.len());
            }
            OscArg::Bool(_) => {}
        }
    }

    debug_assert!(buf.is_empty(), "planned size must match written size");
}

/// Write the concatenated parts, a NUL terminator, and zero padding.
fn put_padded(buf: &mut &mut [u8], parts: &[&[u8]]) {
    let len: usize = parts.iter().map(|part| part.len()).sum();
    for part in parts {
        buf.put_slice(part);
    }
    buf.put_bytes(0, padded_str_size(len) - len);
}
