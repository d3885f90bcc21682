use crate::error::Result;

/// A destination for complete datagrams.
///
/// Each call is one message on the wire. Implementations must not split,
/// merge, or queue datagrams, and must not retry a failed send.
pub trait DatagramSink {
    /// Send one datagram.
    fn send_datagram(&mut self, datagram: &[u8]) -> Result<()>;
}

impl<S: DatagramSink + ?Sized> DatagramSink for &mut S {
    fn send_datagram(&mut self, datagram: &[u8]) -> Result<()> {
        (**self).send_datagram(datagram)
    }
}

impl<S: DatagramSink + ?Sized> DatagramSink for Box<S> {
    fn send_datagram(&mut self, datagram: &[u8]) -> Result<()> {
        (**self).send_datagram(datagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<Vec<u8>>,
    }

    impl DatagramSink for Recorder {
        fn send_datagram(&mut self, datagram: &[u8]) -> Result<()> {
            self.sent.push(datagram.to_vec());
            Ok(())
        }
    }

    fn send_twice<S: DatagramSink>(mut sink: S) {
        sink.send_datagram(b"one").unwrap();
        sink.send_datagram(b"two").unwrap();
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut recorder = Recorder::default();
        send_twice(&mut recorder);
        assert_eq!(recorder.sent, vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn boxed_sink_forwards() {
        let mut boxed: Box<Recorder> = Box::default();
        boxed.send_datagram(b"x").unwrap();
        assert_eq!(boxed.sent.len(), 1);
    }
}
