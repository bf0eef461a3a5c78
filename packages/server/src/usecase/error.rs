//! UseCase-level error types.
//!
//! どのエラーも送信元クライアントには通知されない（イベントは警告ログと
//! ともに破棄される）。可用性優先のポリシー。

use thiserror::Error;

/// Errors raised by [`super::JoinChatUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The connection has already joined.
    #[error("connection '{0}' has already joined")]
    InvalidState(String),
}

/// Errors raised by [`super::SendMessageUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// The connection has not joined yet.
    #[error("connection '{0}' has not joined yet")]
    InvalidState(String),
    /// A message with the same id already exists in the log.
    #[error("message id '{0}' already exists")]
    DuplicateId(String),
}

/// Errors raised by [`super::UpdateMessageUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateMessageError {
    /// The connection has not joined yet.
    #[error("connection '{0}' has not joined yet")]
    InvalidState(String),
    /// No message with the given id exists.
    #[error("message id '{0}' not found")]
    NotFound(String),
}

/// Errors raised by [`super::ReactToMessageUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReactError {
    /// The connection has not joined yet.
    #[error("connection '{0}' has not joined yet")]
    InvalidState(String),
    /// No message with the given id exists.
    #[error("message id '{0}' not found")]
    NotFound(String),
}

/// Errors raised by [`super::LeaveChatUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveError {
    /// The connection has not joined.
    #[error("connection '{0}' has not joined")]
    InvalidState(String),
}
