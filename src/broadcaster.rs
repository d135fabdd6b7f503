use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufRead, Lines},
    net::UdpSocket,
};
use tracing::{debug, warn};

use crate::message::{self, ChatMessage, TEXT_CAPACITY};

/// Talking half of the chat: reads console input and sends each token as
/// one fixed-size datagram to the broadcast target.
pub struct Broadcaster {
    socket: UdpSocket,
    target: SocketAddr,
    display_name: String,
}

impl Broadcaster {
    /// Binds an ephemeral sending socket with broadcast enabled.
    ///
    /// The session passes the limited broadcast address as the target;
    /// tests substitute a loopback address. Failures here are fatal.
    pub async fn new(display_name: String, target: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .await
            .context("failed to create broadcast socket")?;
        socket
            .set_broadcast(true)
            .context("failed to enable broadcast")?;

        Ok(Self {
            socket,
            target,
            display_name,
        })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }

    /// Encodes and sends one message, returning the bytes put on the wire.
    pub async fn send(&self, text: &str) -> std::io::Result<usize> {
        let record = message::encode(&ChatMessage {
            name: self.display_name.clone(),
            text: text.to_string(),
        });
        self.socket.send_to(&record, self.target).await
    }

    /// Reads console input until end of input or process death.
    ///
    /// The reader is the same one the nickname prompt used, so input
    /// typed ahead of the prompt is still sent. Only the first
    /// whitespace-delimited token of each line goes out; the rest of the
    /// line is dropped. A failed send is logged and the loop moves on to
    /// the next input.
    pub async fn run<R>(self, mut console: Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        println!(
            "Enter messages up to {} bytes to send to {}...",
            TEXT_CAPACITY - 1,
            self.target
        );
        println!("Press Ctrl+C to stop.");

        while let Some(line) = console
            .next_line()
            .await
            .context("failed to read console input")?
        {
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };

            match self.send(token).await {
                Ok(bytes) => debug!(bytes, "message sent"),
                Err(error) => warn!(%error, "send failed"),
            }
        }

        Ok(())
    }
}
