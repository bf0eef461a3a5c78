//! Domain entities: messages, the message log, and the roster.

mod message;
mod message_log;
mod roster;

pub use message::{Message, PollOption, SYSTEM_USERNAME};
pub use message_log::MessageLog;
pub use roster::Roster;
