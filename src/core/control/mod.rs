//! Control plane: an HTTP endpoint on a unix socket and its one-shot client.

pub mod client;
pub mod server;

pub use client::ControlClient;
pub use server::{bind, serve, SocketGuard};
