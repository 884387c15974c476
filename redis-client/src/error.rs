//! The error taxonomy of a session.
//!
//! Every failure is terminal for the session it occurred on; nothing here is
//! retried. The variants keep the three failure stages apart so the operator
//! message says which step went wrong.

use std::fmt;
use std::io;

/// A fatal session error.
#[derive(Debug)]
pub enum Error {
    /// The remote endpoint was unreachable, refused the connection, or the
    /// connect attempt timed out.
    Connection(io::Error),

    /// The server rejected the AUTH credential. Carries the server's reply.
    Authentication(String),

    /// A transport or server-side failure while a command was in flight,
    /// including protocol violations and mid-stream resets.
    StoreOperation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an in-flight transport failure.
    pub(crate) fn store(err: impl fmt::Display) -> Error {
        Error::StoreOperation(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Connection(err) => write!(fmt, "connection failed: {}", err),
            Error::Authentication(msg) => write!(fmt, "authentication failed: {}", msg),
            Error::StoreOperation(msg) => write!(fmt, "store operation failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Connection(err) => Some(err),
            Error::Authentication(_) | Error::StoreOperation(_) => None,
        }
    }
}
