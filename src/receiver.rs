use std::net::SocketAddr;

use anyhow::{Context, Result};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tracing::debug;

use crate::{
    cli::SessionConfig,
    message::{self, ChatMessage, RECORD_LEN},
};

/// Listening half of the chat: owns the bound socket and prints every
/// datagram that arrives.
pub struct Receiver {
    socket: UdpSocket,
}

impl Receiver {
    /// Creates the listening socket and binds it to the configured
    /// address and port.
    ///
    /// Address and port reuse are enabled first so several chat instances
    /// on one host can share the port. Every failure here is fatal; there
    /// is no fallback address and no retry.
    pub fn bind(config: &SessionConfig) -> Result<Self> {
        debug!("creating receiver socket");
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
            .context("failed to create receiver socket")?;
        socket
            .set_reuse_address(true)
            .context("failed to enable address reuse")?;
        #[cfg(unix)]
        socket
            .set_reuse_port(true)
            .context("failed to enable port reuse")?;
        socket
            .set_nonblocking(true)
            .context("failed to switch receiver socket to non-blocking mode")?;

        let addr = SocketAddr::from((config.bind_address, config.listen_port));
        socket
            .bind(&addr.into())
            .with_context(|| format!("failed to bind receiver to {addr}"))?;

        let socket = UdpSocket::from_std(socket.into())
            .context("failed to register receiver socket with the runtime")?;
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Waits for the next non-empty datagram and decodes it.
    ///
    /// Any payload length is accepted; short datagrams decode with the
    /// missing bytes read as zero.
    pub async fn recv_chat(&self) -> std::io::Result<(ChatMessage, SocketAddr)> {
        let mut buf = [0u8; RECORD_LEN];
        loop {
            let (len, peer) = self.socket.recv_from(&mut buf).await?;
            if len == 0 {
                continue;
            }
            return Ok((message::decode(&buf[..len]), peer));
        }
    }

    /// Prints incoming messages until the process is killed.
    pub async fn run(self) -> Result<()> {
        loop {
            let (chat, peer) = self
                .recv_chat()
                .await
                .context("failed to receive datagram")?;
            println!("{}", render_chat_line(&chat, peer));
        }
    }
}

/// Formats one incoming message with its declared sender name and the
/// resolved source address.
pub fn render_chat_line(message: &ChatMessage, source: SocketAddr) -> String {
    format!("[{source}] <{}> {}", message.name, message.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_line_shows_name_source_and_text() {
        let line = render_chat_line(
            &ChatMessage {
                name: "alice".into(),
                text: "hello".into(),
            },
            "127.0.0.1:9999".parse().expect("socket addr"),
        );

        assert_eq!(line, "[127.0.0.1:9999] <alice> hello");
    }
}
