//! Hello OSC — sends "Hello VRChat!" to the chatbox on the local machine.
//!
//! Run with:
//!   cargo run --example hello-osc [-- <host:port>]

use oscprims::message::{encode_message, OscArg};
use oscprims::transport::{UdpSender, DEFAULT_PORT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| format!("127.0.0.1:{DEFAULT_PORT}"));

    let mut buffer = [0u8; 1024];
    let len = encode_message(
        &mut buffer,
        "/chatbox/input",
        "sT",
        &[OscArg::from("Hello VRChat!")],
    )?;

    let sender = UdpSender::connect(target.as_str())?;
    sender.send(&buffer[..len])?;
    eprintln!("sent {len} bytes to {}", sender.target());

    Ok(())
}
