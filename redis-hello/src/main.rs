//! Hello-world round trip against a Redis server.
//!
//! Connects, authenticates when a password is configured, writes one key,
//! reads it back and prints `Retrieved: <value>`. Every configuration input
//! can come from a flag or the matching `REDIS_*` environment variable, so
//! no secret ever lives in the source.

#![warn(clippy::pedantic)]

use bytes::Bytes;
use clap::Parser;
use redis_client::{Credential, Endpoint, Session, DEFAULT_PORT};
use std::process::ExitCode;
use std::str;

#[derive(Parser, Debug)]
#[command(
    name = "redis-hello",
    version,
    author,
    about = "One authenticated SET/GET round trip against a Redis server"
)]
struct Args {
    #[clap(long, env = "REDIS_HOST", default_value = "127.0.0.1")]
    host: String,

    #[clap(long, env = "REDIS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Server password. AUTH is skipped when it is not set.
    #[clap(long, env = "REDIS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Key written and then read back.
    #[clap(long, default_value = "key_demo")]
    key: String,

    /// Value stored under the key.
    #[clap(long, default_value = "hello")]
    value: String,
}

/// `flavor = "current_thread"` keeps this one-shot program on a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Enable logging; verbosity is controlled through `RUST_LOG`.
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("redis-hello: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// The whole scenario, strictly sequential. Any error unwinds out of here and
/// drops the session, which closes the connection on every exit path.
async fn run(args: Args) -> redis_client::Result<()> {
    let endpoint = Endpoint::new(&args.host, args.port);
    let mut session = Session::connect(&endpoint).await?;

    if let Some(password) = args.password {
        session.authenticate(&Credential::new(password)).await?;
    }

    session
        .set(&args.key, Bytes::from(args.value.into_bytes()))
        .await?;

    match session.get(&args.key).await? {
        Some(value) => match str::from_utf8(&value) {
            Ok(string) => println!("Retrieved: {}", string),
            Err(_) => println!("Retrieved: {:?}", value),
        },
        None => println!("Retrieved: (nil)"),
    }

    Ok(())
}
