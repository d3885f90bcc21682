//! Async variant of hello-osc using the tokio sender.
//!
//! Run with:
//!   cargo run --example async-hello-osc --features async

use oscprims::message::OscMessage;
use oscprims::transport::AsyncUdpSender;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message = OscMessage::new("/chatbox/input")
        .with_arg("Hello VRChat!")
        .with_arg(true);
    let bytes = message.to_bytes()?;

    let sender = AsyncUdpSender::connect("127.0.0.1:9000").await?;
    let sent = sender.send(&bytes).await?;
    eprintln!("sent {sent} bytes to {}", sender.target());

    Ok(())
}
