use oscprims_message::{MessageWriter, WriterConfig};
use tracing::info;

use crate::cmd::SendArgs;
use crate::exit::{message_error, CliResult, SUCCESS};
use crate::output::{print_message, MessageReport, OutputFormat};
use crate::values::parse_values;

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let message = &args.message;
    let values = parse_values(&message.address, &message.tags, &message.values)?;

    let sender = args.target.open()?;
    let target = sender.target();
    let config = WriterConfig {
        buffer_capacity: args.target.buffer_size,
    };
    let mut writer = MessageWriter::with_config(sender, config);

    let len = writer
        .send(&message.address, &message.tags, &values)
        .map_err(|err| message_error("send failed", err))?;
    info!(address = %message.address, target = %target, bytes = len, "message sent");

    let report = MessageReport::new(&message.address, &message.tags, writer.last_datagram())
        .with_target(target);
    print_message(&report, writer.last_datagram(), format);

    Ok(SUCCESS)
}
