use oscprims_message::{MessageWriter, OscMessage, WriterConfig};
use tracing::info;

use crate::cmd::ChatboxArgs;
use crate::exit::{message_error, CliResult, SUCCESS};
use crate::output::{print_message, MessageReport, OutputFormat};

pub const CHATBOX_INPUT: &str = "/chatbox/input";

pub fn run(args: ChatboxArgs, format: OutputFormat) -> CliResult<i32> {
    let message = chatbox_message(&args.text, !args.no_immediate);

    let sender = args.target.open()?;
    let target = sender.target();
    let config = WriterConfig {
        buffer_capacity: args.target.buffer_size,
    };
    let mut writer = MessageWriter::with_config(sender, config);

    let len = writer
        .send_message(&message)
        .map_err(|err| message_error("send failed", err))?;
    info!(target = %target, bytes = len, "chatbox message sent");

    let type_tags = message.type_tags();
    let report =
        MessageReport::new(&message.address, &type_tags, writer.last_datagram()).with_target(target);
    print_message(&report, writer.last_datagram(), format);

    Ok(SUCCESS)
}

/// `/chatbox/input` takes the text and whether to bypass the keyboard.
fn chatbox_message(text: &str, immediate: bool) -> OscMessage {
    OscMessage::new(CHATBOX_INPUT).with_arg(text).with_arg(immediate)
}
