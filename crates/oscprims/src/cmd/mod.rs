use clap::{Args, Subcommand};
use oscprims_message::DEFAULT_BUFFER_CAPACITY;
use clap::builder::RangedU64ValueParser;
use oscprims_transport::{
    resolve_target, UdpSender, DEFAULT_HOST, DEFAULT_PORT, MAX_DATAGRAM_SIZE,
};
use tracing::debug;

use crate::exit::{transport_error, CliResult};
use crate::output::OutputFormat;

pub mod chatbox;
pub mod encode;
pub mod send;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a message and send it as one UDP datagram.
    Send(SendArgs),
    /// Encode a message and print the bytes without sending.
    Encode(EncodeArgs),
    /// Send text to the VRChat chatbox (/chatbox/input).
    Chatbox(ChatboxArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Send(args) => send::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Chatbox(args) => chatbox::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Smallest accepted `--buffer-size`, one aligned word.
pub const MIN_BUFFER_SIZE: usize = 4;

/// Buffer sizes beyond one UDP datagram could never be sent.
fn buffer_size_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new()
        .range(MIN_BUFFER_SIZE as u64..=MAX_DATAGRAM_SIZE as u64)
}

#[derive(Args, Debug)]
pub struct MessageArgs {
    /// OSC address pattern (e.g. /chatbox/input).
    pub address: String,
    /// Type tags without the leading comma (i, f, s, b, T, F).
    #[arg(long, short = 't', default_value = "")]
    pub tags: String,
    /// One value per i/f/s/b tag, in order. Blobs are hex.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Destination host or IP.
    #[arg(long, env = "OSCPRIMS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,
    /// Destination UDP port.
    #[arg(long, short = 'p', env = "OSCPRIMS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Encode buffer capacity in bytes.
    #[arg(
        long,
        env = "OSCPRIMS_BUFFER_SIZE",
        default_value_t = DEFAULT_BUFFER_CAPACITY,
        value_parser = buffer_size_parser()
    )]
    pub buffer_size: usize,
}

impl TargetArgs {
    /// Resolve the destination and open an ephemeral sender for it.
    pub fn open(&self) -> CliResult<UdpSender> {
        let target = resolve_target(&self.host, self.port)
            .map_err(|err| transport_error("resolve failed", err))?;
        debug!(target = %target, "opening udp sender");
        UdpSender::connect(target).map_err(|err| transport_error("socket setup failed", err))
    }
}

#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub message: MessageArgs,
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub message: MessageArgs,
    /// Encode buffer capacity in bytes.
    #[arg(
        long,
        env = "OSCPRIMS_BUFFER_SIZE",
        default_value_t = DEFAULT_BUFFER_CAPACITY,
        value_parser = buffer_size_parser()
    )]
    pub buffer_size: usize,
}

#[derive(Args, Debug)]
pub struct ChatboxArgs {
    /// Text to show in the chatbox.
    pub text: String,
    /// Open the keyboard with the text instead of sending it immediately.
    #[arg(long)]
    pub no_immediate: bool,
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
