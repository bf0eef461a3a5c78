//! Ordered, mutable log of all messages sent since server start.

use crate::domain::error::StoreError;
use crate::domain::value_object::MessageId;

use super::message::Message;

/// The message store: an append-ordered log supporting in-place replacement
/// by id. Replacements keep the original insertion position, so a snapshot
/// always reflects the original send order.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log.
    ///
    /// Fails with [`StoreError::DuplicateId`] if a message with the same id
    /// already exists; the log is left unchanged.
    pub fn append(&mut self, message: Message) -> Result<(), StoreError> {
        if self.messages.iter().any(|m| m.id == message.id) {
            return Err(StoreError::DuplicateId(message.id.into_string()));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Replace the full record of the message with the same id.
    ///
    /// Fails with [`StoreError::NotFound`] if no message with that id
    /// exists; the log is left unchanged.
    pub fn replace_by_id(&mut self, message: Message) -> Result<(), StoreError> {
        match self.messages.iter_mut().find(|m| m.id == message.id) {
            Some(existing) => {
                *existing = message;
                Ok(())
            }
            None => Err(StoreError::NotFound(message.id.into_string())),
        }
    }

    /// Find a message by id.
    pub fn find_by_id(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }

    /// Full ordered copy of the log, as sent to a newly connected client.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }
}
