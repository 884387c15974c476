//! Ad-hoc command line client: issue a single PING, GET or SET against a
//! running server.

#![warn(clippy::pedantic)]

use bytes::Bytes;
use clap::{Parser, Subcommand};
use redis_client::{Credential, Endpoint, Session, DEFAULT_PORT};
use std::process::ExitCode;
use std::str;

#[derive(Parser, Debug)]
#[command(
    name = "redis-hello-cli",
    version,
    author,
    about = "Issue Redis commands"
)]
struct CliCommand {
    #[clap(subcommand)]
    sub_cmd: Command,

    #[clap(long, env = "REDIS_HOST", default_value = "127.0.0.1")]
    host: String,

    #[clap(long, env = "REDIS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Server password. AUTH is skipped when it is not set.
    #[clap(long, env = "REDIS_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ping the server, optionally echoing a message.
    Ping { echo: Option<String> },
    /// Get the value of a key.
    Get { key: String },
    /// Set a key to a value.
    Set { key: String, value: String },
}

/// `flavor = "current_thread"` is used here to make the CLI lighter instead
/// of multi-threads.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Enable logging; verbosity is controlled through `RUST_LOG`.
    tracing_subscriber::fmt::init();

    let cli = CliCommand::parse();

    if let Err(err) = run(cli).await {
        eprintln!("redis-hello-cli: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(cli: CliCommand) -> redis_client::Result<()> {
    let endpoint = Endpoint::new(&cli.host, cli.port);
    let mut session = Session::connect(&endpoint).await?;

    if let Some(password) = cli.password {
        session.authenticate(&Credential::new(password)).await?;
    }

    match cli.sub_cmd {
        Command::Ping { echo } => {
            let echo = echo.map(|msg| Bytes::from(msg.into_bytes()));
            let bytes = session.ping(echo).await?;
            if let Ok(string) = str::from_utf8(&bytes) {
                println!("\"{}\"", string);
            } else {
                println!("{:?}", bytes);
            }
        }
        Command::Get { key } => {
            if let Some(bytes) = session.get(&key).await? {
                if let Ok(string) = str::from_utf8(&bytes) {
                    println!("\"{}\"", string);
                } else {
                    println!("{:?}", bytes);
                }
            } else {
                println!("(nil)");
            }
        }
        Command::Set { key, value } => {
            session.set(&key, Bytes::from(value.into_bytes())).await?;
            println!("OK");
        }
    }

    Ok(())
}
