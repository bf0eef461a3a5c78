//! Chat message entity.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::value_object::{MessageId, Timestamp};

/// Author name used for server-generated join/leave notices.
pub const SYSTEM_USERNAME: &str = "System";

/// A single option of a poll message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    /// Voter display names. A name appears at most once per option, and at
    /// most once across all options of a poll; both are maintained by the
    /// vote-toggle transformation, not by the storage shape.
    pub votes: Vec<String>,
}

/// A chat message as kept in the log.
///
/// Immutable after creation except for the reactions map and poll vote
/// lists, which are mutated via full-record replacement. A message is in
/// practice either a normal message (reactions only) or a poll message
/// (poll options only); the shape does not enforce the distinction, matching
/// what clients actually send.
///
/// The reactions map is kept canonical: no empty per-emoji name list, and an
/// empty map is represented as `None`. This is what makes the reaction
/// toggle its own inverse.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    /// Author display name, echoed as provided by the client.
    pub username: String,
    pub timestamp: Timestamp,
    /// Reply target. May dangle; the view renders missing targets as
    /// "not found".
    pub reply_to: Option<MessageId>,
    /// Emoji -> display names of reactors.
    pub reactions: Option<HashMap<String, Vec<String>>>,
    pub is_poll: Option<bool>,
    pub poll_options: Option<Vec<PollOption>>,
}

impl Message {
    /// Create a server-generated system notice (join/leave).
    pub fn system(text: String, timestamp: Timestamp) -> Self {
        Self {
            id: MessageId::new(Uuid::new_v4().to_string())
                .expect("generated message id is never empty"),
            text,
            username: SYSTEM_USERNAME.to_string(),
            timestamp,
            reply_to: None,
            reactions: None,
            is_poll: None,
            poll_options: None,
        }
    }
}
