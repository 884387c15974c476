use crate::cmd::Protocol;
use crate::frame::PushFrame;
use crate::Frame;
use bytes::Bytes;

/// Returns PONG if no argument is provided, otherwise a copy of the argument
/// as a bulk.
///
/// This command is often used to test if a connection is still alive, or to
/// measure latency.
///
/// # Format
///
/// ```text
/// PING [message]
/// ```
#[derive(Debug, Default)]
pub struct Ping {
    echo: Option<Bytes>,
}

impl Ping {
    pub fn new(echo: Option<Bytes>) -> Ping {
        Ping { echo }
    }
}

impl Protocol for Ping {
    fn into_frame(self) -> Frame {
        let mut frame = vec![];
        frame.push_bulk(Bytes::from("ping".as_bytes()));
        if let Some(msg) = self.echo {
            frame.push_bulk(msg);
        }

        frame.into()
    }
}
