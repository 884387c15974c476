use crate::cmd::Protocol;
use crate::frame::PushFrame;
use crate::Frame;
use bytes::Bytes;

/// Get the value of key.
///
/// If the key does not exist the special value nil is returned.
///
/// # Format
///
/// ```text
/// GET key
/// ```
#[derive(Debug)]
pub struct Get {
    key: String,
}

impl Get {
    pub fn new(key: impl ToString) -> Get {
        Get {
            key: key.to_string(),
        }
    }
}

impl Protocol for Get {
    fn into_frame(self) -> Frame {
        let mut frame = vec![];
        frame.push_bulk(Bytes::from("get".as_bytes()));
        frame.push_bulk(Bytes::from(self.key.into_bytes()));

        frame.into()
    }
}
