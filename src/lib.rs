//! Minimal LAN chat over UDP broadcast.
//!
//! Every running instance both listens and talks: one task receives
//! datagrams on a configured address and prints them, while another reads
//! console input and broadcasts it to `255.255.255.255` on the same port.
//! There is no handshake, discovery, or delivery guarantee; each datagram
//! is fire-and-forget. Each module focuses on a concrete responsibility:
//!
//! - [`cli`] parses the command-line interface and builds the immutable
//!   session configuration, including the interactive nickname prompt.
//! - [`message`] defines the fixed-width wire record shared by all peers.
//! - [`receiver`] binds the listening socket and prints incoming messages.
//! - [`broadcaster`] reads console input and sends it to the broadcast
//!   address.
//! - [`session`] starts both loops as independent tasks and waits on them.
//!
//! Integration and end-to-end tests use this crate directly to exercise
//! the wire format and both socket loops over loopback.

pub mod broadcaster;
pub mod cli;
pub mod message;
pub mod receiver;
pub mod session;
