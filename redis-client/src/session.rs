//! One authenticated session against a Redis server.
//!
//! Provides an async connect and methods for issuing the supported commands.
//! A session moves through `connect` → `authenticate` → commands; any error
//! is terminal and the caller is expected to drop the session, which closes
//! the underlying socket.

use crate::cmd::{Auth, Get, Ping, Protocol, Set};
use crate::{Connection, Error, Frame};

use bytes::Bytes;
use std::fmt;
use std::io;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time;
use tracing::{debug, instrument};

/// Network address of the remote store. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    pub fn new(host: impl ToString, port: u16) -> Endpoint {
        Endpoint {
            host: host.to_string(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}:{}", self.host, self.port)
    }
}

/// Secret used once to authenticate a session. Not persisted anywhere.
pub struct Credential(String);

impl Credential {
    pub fn new(password: impl Into<String>) -> Credential {
        Credential(password.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("Credential(<redacted>)")
    }
}

/// Bound on the TCP connect attempt. A host that drops SYNs would otherwise
/// keep the caller waiting for the OS retransmit schedule to give up.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A session established with a Redis server.
///
/// Backed by a single `TcpStream`, exclusively owned for the whole lifetime
/// of the session. Dropping the `Session` closes the connection; there is no
/// explicit close step to forget on an error path.
#[derive(Debug)]
pub struct Session {
    connection: Connection,
}

impl Session {
    /// Establish a connection with the server at `endpoint`.
    ///
    /// Any failure to reach the host, including the connect attempt timing
    /// out, surfaces as [`Error::Connection`].
    pub async fn connect(endpoint: &Endpoint) -> crate::Result<Session> {
        let connect = TcpStream::connect((endpoint.host(), endpoint.port()));
        let stream = match time::timeout(CONNECT_TIMEOUT, connect).await {
            Ok(result) => result.map_err(Error::Connection)?,
            Err(_elapsed) => {
                return Err(Error::Connection(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("connecting to {} timed out", endpoint),
                )))
            }
        };

        Ok(Session {
            connection: Connection::new(stream),
        })
    }

    /// Authenticate the session with `credential`.
    ///
    /// Must happen before any command when the server requires a password. If
    /// the server rejects the credential, [`Error::Authentication`] is
    /// returned and the session must not be used further.
    #[instrument(skip(self, credential))]
    pub async fn authenticate(&mut self, credential: &Credential) -> crate::Result<()> {
        let frame = Auth::new(credential.expose()).into_frame();

        // Deliberately not logging the request frame here; it carries the
        // password.
        debug!("sending AUTH");
        self.connection.write_frame(&frame).await.map_err(Error::store)?;

        match self.read_response().await? {
            Frame::Simple(response) if response == "OK" => Ok(()),
            Frame::Error(msg) => Err(Error::Authentication(msg)),
            frame => Err(frame.to_error()),
        }
    }

    /// Ping the server.
    ///
    /// Returns `PONG` when no message is supplied, otherwise the echo of the
    /// message.
    #[instrument(skip(self))]
    pub async fn ping(&mut self, msg: Option<Bytes>) -> crate::Result<Bytes> {
        let frame = Ping::new(msg).into_frame();
        debug!(request = ?frame);
        self.connection.write_frame(&frame).await.map_err(Error::store)?;

        match self.read_response().await? {
            Frame::Simple(value) => Ok(value.into()),
            Frame::Bulk(value) => Ok(value),
            Frame::Error(msg) => Err(Error::StoreOperation(msg)),
            frame => Err(frame.to_error()),
        }
    }

    /// Get the value of key.
    ///
    /// If the key does not exist, `None` is returned; an absent key is not an
    /// error.
    #[instrument(skip(self))]
    pub async fn get(&mut self, key: &str) -> crate::Result<Option<Bytes>> {
        // Create a `Get` command for the `key` and convert it to a frame.
        let frame = Get::new(key).into_frame();

        debug!(request = ?frame);

        // Write the frame to the socket. This writes the full frame to the
        // socket, waiting if necessary.
        self.connection.write_frame(&frame).await.map_err(Error::store)?;

        // Wait for the response from the server.
        //
        // Both `Simple` and `Bulk` frames are accepted. `Null` represents the
        // key not being present and `None` is returned.
        match self.read_response().await? {
            Frame::Simple(value) => Ok(Some(value.into())),
            Frame::Bulk(value) => Ok(Some(value)),
            Frame::Null => Ok(None),
            Frame::Error(msg) => Err(Error::StoreOperation(msg)),
            frame => Err(frame.to_error()),
        }
    }

    /// Set `key` to hold the given `value`.
    ///
    /// If key already holds a value, it is overwritten.
    #[instrument(skip(self))]
    pub async fn set(&mut self, key: &str, value: Bytes) -> crate::Result<()> {
        let frame = Set::new(key, value).into_frame();

        debug!(request = ?frame);

        self.connection.write_frame(&frame).await.map_err(Error::store)?;

        // On success the server responds simply with `OK`.
        match self.read_response().await? {
            Frame::Simple(response) if response == "OK" => Ok(()),
            Frame::Error(msg) => Err(Error::StoreOperation(msg)),
            frame => Err(frame.to_error()),
        }
    }

    /// Reads a response frame from the socket.
    ///
    /// Server `Error` frames are returned as frames so each command can
    /// classify them; only transport-level failures become errors here.
    async fn read_response(&mut self) -> crate::Result<Frame> {
        let response = self.connection.read_frame().await.map_err(Error::store)?;

        debug!(?response);

        match response {
            Some(frame) => Ok(frame),
            // `None` indicates the server closed the connection without
            // sending a frame.
            None => Err(Error::store("connection reset by server")),
        }
    }
}
