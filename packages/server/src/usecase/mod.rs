//! UseCase layer: one use case per protocol event.
//!
//! 受信イベントごとの状態遷移（store / roster の変更とブロードキャスト
//! 対象の決定）をここで行う。ハンドラ層はパースとシリアライズのみを担当。

mod connect_client;
mod disconnect_client;
mod error;
mod join_chat;
mod leave_chat;
mod react_to_message;
mod send_message;
mod update_message;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{JoinError, LeaveError, ReactError, SendMessageError, UpdateMessageError};
pub use join_chat::JoinChatUseCase;
pub use leave_chat::LeaveChatUseCase;
pub use react_to_message::ReactToMessageUseCase;
pub use send_message::SendMessageUseCase;
pub use update_message::UpdateMessageUseCase;
