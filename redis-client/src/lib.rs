//! A minimal async Redis client built for one job: open a session, AUTH,
//! write a key, read it back.
//!
//! The major components are:
//! * `session`: a single authenticated connection to the server.
//! * `cmd`: client-side encodings of the supported commands.
//! * `frame`: represents a single Redis protocol frame.

#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]

pub mod cmd;

mod connection;
pub use connection::Connection;

mod error;
pub use error::{Error, Result};

pub mod frame;
pub use frame::Frame;

mod session;
pub use session::{Credential, Endpoint, Session};

/// Default port that a redis server listens on.
pub const DEFAULT_PORT: u16 = 6379;
