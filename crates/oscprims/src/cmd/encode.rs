use oscprims_message::encode_message;

use crate::cmd::EncodeArgs;
use crate::exit::{message_error, CliResult, SUCCESS};
use crate::output::{print_message, MessageReport, OutputFormat};
use crate::values::parse_values;

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let message = &args.message;
    let values = parse_values(&message.address, &message.tags, &message.values)?;

    let mut buf = vec![0u8; args.buffer_size];
    let len = encode_message(&mut buf, &message.address, &message.tags, &values)
        .map_err(|err| message_error("encode failed", err))?;

    let report = MessageReport::new(&message.address, &message.tags, &buf[..len]);
    print_message(&report, &buf[..len], format);

    Ok(SUCCESS)
}
