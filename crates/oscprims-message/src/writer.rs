use oscprims_transport::DatagramSink;
use tracing::debug;

use crate::arg::OscArg;
use crate::encoder::encode_message;
use crate::error::Result;
use crate::message::OscMessage;

/// Default scratch buffer capacity in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Configuration for [`MessageWriter`].
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Scratch buffer capacity. Messages that encode larger fail with
    /// [`crate::MessageError::BufferTooSmall`]. Default: 1024 bytes.
    pub buffer_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

/// Encodes messages into a reusable buffer and sends each as one datagram.
pub struct MessageWriter<T> {
    inner: T,
    buf: Vec<u8>,
    last_len: usize,
    config: WriterConfig,
}

impl<T: DatagramSink> MessageWriter<T> {
    /// Create a new message writer with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, WriterConfig::default())
    }

    /// Create a new message writer with explicit configuration.
    pub fn with_config(inner: T, config: WriterConfig) -> Self {
        Self {
            inner,
            buf: vec![0; config.buffer_capacity],
            last_len: 0,
            config,
        }
    }

    /// Encode and send one message. Returns the datagram size.
    ///
    /// Nothing is sent if encoding fails. A failed send is not retried.
    pub fn send(&mut self, address: &str, type_tags: &str, args: &[OscArg]) -> Result<usize> {
        self.last_len = 0;
        let len = encode_message(&mut self.buf, address, type_tags, args)?;
        self.inner.send_datagram(&self.buf[..len])?;
        self.last_len = len;
        debug!(address, type_tags, bytes = len, "osc message sent");
        Ok(len)
    }

    /// Encode and send an owned message.
    pub fn send_message(&mut self, message: &OscMessage) -> Result<usize> {
        self.send(
            &message.address,
            &message.type_tags(),
            &message.payload_args(),
        )
    }

    /// The bytes of the last successfully sent datagram.
    pub fn last_datagram(&self) -> &[u8] {
        &self.buf[..self.last_len]
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Resize the scratch buffer for subsequent messages.
    pub fn set_buffer_capacity(&mut self, buffer_capacity: usize) {
        self.config.buffer_capacity = buffer_capacity;
        self.buf.resize(buffer_capacity, 0);
        self.last_len = 0;
    }

    /// Current writer configuration.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;
    use std::time::Duration;

    use oscprims_transport::{TransportError, UdpSender};

    use super::*;
    use crate::error::MessageError;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<Vec<u8>>,
    }

    impl DatagramSink for Recorder {
        fn send_datagram(&mut self, datagram: &[u8]) -> oscprims_transport::Result<()> {
            self.sent.push(datagram.to_vec());
            Ok(())
        }
    }

    struct FailingSink;

    impl DatagramSink for FailingSink {
        fn send_datagram(&mut self, _datagram: &[u8]) -> oscprims_transport::Result<()> {
            Err(TransportError::Io(std::io::Error::other("network unreachable")))
        }
    }

    #[test]
    fn sends_exactly_the_encoded_bytes() {
        let mut writer = MessageWriter::new(Recorder::default());

        let len = writer
            .send("/chatbox/input", "sT", &[OscArg::from("Hello VRChat!")])
            .unwrap();

        assert_eq!(writer.last_datagram().len(), 36);
        let sent = writer.into_inner().sent;
        assert_eq!(len, 36);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].len(), 36);
        assert_eq!(&sent[0][..16], b"/chatbox/input\0\0");
    }

    #[test]
    fn each_message_is_one_datagram() {
        let mut writer = MessageWriter::new(Recorder::default());

        writer.send("/a", "i", &[OscArg::Int(1)]).unwrap();
        writer.send("/b", "", &[]).unwrap();
        writer
            .send_message(&OscMessage::new("/c").with_arg(false))
            .unwrap();

        let sent = writer.into_inner().sent;
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1], b"/b\0\0,\0\0\0");
        assert_eq!(&sent[2][4..8], b",F\0\0");
    }

    #[test]
    fn shorter_message_after_longer_has_clean_padding() {
        let mut writer = MessageWriter::new(Recorder::default());

        writer.send("/long/address/here", "s", &[OscArg::from("abcdefgh")]).unwrap();
        writer.send("/s", "s", &[OscArg::from("a")]).unwrap();

        let sent = writer.into_inner().sent;
        assert_eq!(sent[1], b"/s\0\0,s\0\0a\0\0\0");
    }

    #[test]
    fn encoding_failure_sends_nothing() {
        let mut writer = MessageWriter::new(Recorder::default());

        let err = writer.send("/p", "i", &[]).unwrap_err();
        assert!(matches!(err, MessageError::ArgumentCountMismatch { .. }));
        assert!(writer.get_ref().sent.is_empty());
        assert!(writer.last_datagram().is_empty());
    }

    #[test]
    fn capacity_limits_message_size() {
        let cfg = WriterConfig { buffer_capacity: 16 };
        let mut writer = MessageWriter::with_config(Recorder::default(), cfg);

        let err = writer
            .send("/chatbox/input", "sT", &[OscArg::from("Hello VRChat!")])
            .unwrap_err();
        assert!(matches!(
            err,
            MessageError::BufferTooSmall {
                required: 36,
                capacity: 16
            }
        ));

        writer.set_buffer_capacity(36);
        assert_eq!(writer.config().buffer_capacity, 36);
        assert!(writer
            .send("/chatbox/input", "sT", &[OscArg::from("Hello VRChat!")])
            .is_ok());
    }

    #[test]
    fn transport_failure_propagates() {
        let mut writer = MessageWriter::new(FailingSink);
        let err = writer.send("/ping", "", &[]).unwrap_err();
        assert!(matches!(err, MessageError::Transport(TransportError::Io(_))));
    }

    #[test]
    fn sends_over_udp_loopback() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let sender = UdpSender::connect(receiver.local_addr().unwrap()).unwrap();
        let mut writer = MessageWriter::new(sender);

        writer.send("/test", "i", &[OscArg::Int(42)]).unwrap();

        let mut buf = [0u8; 64];
        let (n, _) = receiver.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"/test\0\0\0,i\0\0\0\0\0*");
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut writer = MessageWriter::new(Recorder::default());
        let _ = writer.get_ref();
        let _ = writer.get_mut();
        let _inner = writer.into_inner();
    }
}
