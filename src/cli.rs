use std::net::Ipv4Addr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufRead, Lines};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimal LAN chat over UDP broadcast", long_about = None)]
pub struct Cli {
    /// IPv4 address the receiver binds to (example: 192.168.1.0).
    #[arg(long)]
    pub address: Ipv4Addr,

    /// UDP port used both for listening and as the broadcast destination.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// Output debug information.
    #[arg(long)]
    pub verbose: bool,
}

/// Immutable session settings, built once at startup and shared read-only
/// by both socket loops.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub display_name: String,
    pub bind_address: Ipv4Addr,
    pub listen_port: u16,
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self, display_name: String) -> SessionConfig {
        SessionConfig {
            display_name,
            bind_address: self.address,
            listen_port: self.port,
            verbose: self.verbose,
        }
    }
}

/// Prompts on stdout and reads the operator's display name from the
/// shared console reader.
///
/// Only the first whitespace-delimited token counts; blank lines are
/// skipped. The same reader is handed to the broadcaster afterwards, so
/// input typed ahead of the prompt stays buffered instead of being lost
/// with a throwaway reader. Reaching end of input without a token is a
/// fatal setup error.
pub async fn prompt_display_name<R>(console: &mut Lines<R>) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    println!("Enter your nickname:");

    while let Some(line) = console
        .next_line()
        .await
        .context("failed to read nickname from stdin")?
    {
        if let Some(token) = line.split_whitespace().next() {
            return Ok(token.to_string());
        }
    }

    anyhow::bail!("no nickname provided on stdin")
}
