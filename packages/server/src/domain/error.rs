//! Domain-level error types.

use thiserror::Error;

/// Errors raised by the message log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A message with the same id already exists in the log.
    #[error("message id '{0}' already exists")]
    DuplicateId(String),

    /// No message with the given id exists in the log.
    #[error("message id '{0}' not found")]
    NotFound(String),
}

/// Errors raised when validating value objects from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Message ids are client-generated but must not be empty.
    #[error("message id must not be empty")]
    EmptyMessageId,

    /// Display names are limited to 1-20 characters.
    #[error("username must be 1 to 20 characters, got {0}")]
    UsernameLength(usize),
}

/// Errors raised when pushing messages to connected clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// The target connection is not registered with the pusher.
    #[error("connection '{0}' is not registered")]
    ClientNotFound(String),

    /// The outbound channel for the connection was closed.
    #[error("failed to push message: {0}")]
    PushFailed(String),
}
