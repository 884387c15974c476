use crate::cmd::Protocol;
use crate::frame::PushFrame;
use crate::Frame;
use bytes::Bytes;
use std::fmt;

/// Authenticate the connection with the server password.
///
/// Must be the first command issued on a connection to a password-protected
/// server; every other command is rejected until it succeeds.
///
/// # Format
///
/// ```text
/// AUTH password
/// ```
pub struct Auth {
    password: String,
}

impl Auth {
    pub fn new(password: impl ToString) -> Auth {
        Auth {
            password: password.to_string(),
        }
    }
}

// The password must not leak through logs.
impl fmt::Debug for Auth {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Auth").field("password", &"<redacted>").finish()
    }
}

impl Protocol for Auth {
    fn into_frame(self) -> Frame {
        let mut frame = vec![];
        frame.push_bulk(Bytes::from("auth".as_bytes()));
        frame.push_bulk(Bytes::from(self.password.into_bytes()));

        frame.into()
    }
}
