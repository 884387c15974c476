//! Client-side encodings of the supported Redis commands.
//!
//! Each command type knows how to turn itself into the array frame sent over
//! the wire. Decoding the server's reply lives with the session, since the
//! acceptable replies depend on which step of the session issued the command.

mod auth;
pub use auth::Auth;

mod get;
pub use get::Get;

mod ping;
pub use ping::Ping;

mod set;
pub use set::Set;

use crate::Frame;

/// Convert the command into the `Frame` written to the server.
pub trait Protocol {
    fn into_frame(self) -> Frame;
}
