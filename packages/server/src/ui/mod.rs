//! UI layer: HTTP/WebSocket endpoints and server assembly.

mod handler;
mod server;
mod signal;
mod state;

pub use server::Server;
