//! Command-line values to typed OSC arguments.

use oscprims_message::{parse_type_tags, validate_address, OscArg, TypeTag};

use crate::exit::{message_error, CliError, CliResult, USAGE};

/// Build the argument list for `address` from positional `values`.
///
/// Values are matched in order against the payload-bearing tags. Count
/// mismatches are left for the encoder to report, so surplus values are
/// passed through as strings.
pub fn parse_values(address: &str, type_tags: &str, values: &[String]) -> CliResult<Vec<OscArg>> {
    validate_address(address).map_err(|err| message_error("invalid message", err))?;
    let tags = parse_type_tags(type_tags).map_err(|err| message_error("invalid message", err))?;

    let mut values = values.iter();
    let mut args = Vec::new();
    let mut index = 0;
    for tag in tags {
        if !tag.has_payload() {
            continue;
        }
        let Some(raw) = values.next() else {
            break;
        };
        args.push(parse_value(index, tag, raw)?);
        index += 1;
    }
    args.extend(values.map(|raw| OscArg::Str(raw.clone())));

    Ok(args)
}

/// Parse one value for a payload-bearing `tag`.
fn parse_value(index: usize, tag: TypeTag, raw: &str) -> CliResult<OscArg> {
    let invalid = |err: &dyn std::fmt::Display| {
        CliError::new(
            USAGE,
            format!("value {index} ({raw:?}) is not a valid {}: {err}", tag.type_name()),
        )
    };

    match tag {
        TypeTag::Int32 => raw.parse::<i32>().map(OscArg::Int).map_err(|e| invalid(&e)),
        TypeTag::Float32 => raw.parse::<f32>().map(OscArg::Float).map_err(|e| invalid(&e)),
        TypeTag::Blob => {
            let digits = raw
                .strip_prefix("0x")
                .or_else(|| raw.strip_prefix("0X"))
                .unwrap_or(raw);
            hex::decode(digits).map(OscArg::from).map_err(|e| invalid(&e))
        }
        // String; booleans never reach here.
        _ => Ok(OscArg::Str(raw.to_string())),
    }
}
