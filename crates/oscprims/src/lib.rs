//! Open Sound Control message encoding and UDP sending.
//!
//! oscprims encodes OSC 1.0 messages into caller-owned buffers with explicit
//! bounds and padding guarantees, then sends each one as a single UDP datagram.
//!
//! # Crate Structure
//!
//! - [`message`] — Address validation, type tags, and the message encoder
//! - [`transport`] — UDP datagram sender (async variant behind `async` feature)
//!
//! # Example
//!
//! ```no_run
//! use oscprims::message::{MessageWriter, OscMessage};
//! use oscprims::transport::UdpSender;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sender = UdpSender::connect("127.0.0.1:9000")?;
//! let mut writer = MessageWriter::new(sender);
//! writer.send_message(&OscMessage::new("/chatbox/input").with_arg("Hello VRChat!").with_arg(true))?;
//! # Ok(())
//! # }
//! ```

/// Re-export message types.
pub mod message {
    pub use oscprims_message::*;
}

/// Re-export transport types.
pub mod transport {
    pub use oscprims_transport::*;
}
