use crate::cmd::Protocol;
use crate::frame::PushFrame;
use crate::Frame;
use bytes::Bytes;

/// Set `key` to hold the string `value`.
///
/// If `key` already holds a value, it is overwritten, regardless of its type.
/// Expiry options are not supported; a value lives until the next SET or an
/// explicit delete on the server side.
///
/// # Format
///
/// ```text
/// SET key value
/// ```
#[derive(Debug)]
pub struct Set {
    key: String,
    value: Bytes,
}

impl Set {
    pub fn new(key: impl ToString, value: Bytes) -> Set {
        Set {
            key: key.to_string(),
            value,
        }
    }
}

impl Protocol for Set {
    fn into_frame(self) -> Frame {
        let mut frame = vec![];
        frame.push_bulk(Bytes::from("set".as_bytes()));
        frame.push_bulk(Bytes::from(self.key.into_bytes()));
        frame.push_bulk(self.value);

        frame.into()
    }
}
