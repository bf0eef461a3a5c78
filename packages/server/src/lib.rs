//! Real-time group chat relay.
//!
//! Accepts client connections over WebSocket, fans out messages, polls,
//! threaded replies, and emoji reactions to all connected clients, and
//! maintains a single consistent view of the message history and roster.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
