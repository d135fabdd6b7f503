use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, Lines};
use tracing::debug;

use crate::{broadcaster::Broadcaster, cli::SessionConfig, receiver::Receiver};

/// Destination every message is sent to: the IPv4 limited broadcast
/// address on the configured port.
pub fn broadcast_target(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::BROADCAST, port))
}

/// Starts the receiver and broadcaster as independent tasks and waits on
/// both.
///
/// The console reader is the one the nickname prompt already read from;
/// it moves into the broadcaster task. The tasks share only the
/// read-only configuration. There is no shutdown handshake between them;
/// in normal operation neither loop returns and the process runs until
/// killed.
pub async fn run<R>(config: SessionConfig, console: Lines<R>) -> Result<()>
where
    R: AsyncBufRead + Send + Unpin + 'static,
{
    debug!("-------------------------------");
    debug!("display name: {}", config.display_name);
    debug!("listen port: {}", config.listen_port);
    debug!("bind address: {}", config.bind_address);
    debug!("-------------------------------");

    let receiver = Receiver::bind(&config)?;
    let addr = receiver
        .local_addr()
        .context("failed to resolve bound address")?;
    println!("Listening on {addr}...");

    let broadcaster = Broadcaster::new(
        config.display_name.clone(),
        broadcast_target(config.listen_port),
    )
    .await?;

    debug!("starting receiver task");
    let receive = tokio::spawn(receiver.run());
    debug!("starting broadcaster task");
    let broadcast = tokio::spawn(broadcaster.run(console));

    let (received, broadcast) = tokio::try_join!(receive, broadcast).context("chat task failed")?;
    received?;
    broadcast?;
    Ok(())
}
