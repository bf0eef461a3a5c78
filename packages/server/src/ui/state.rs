//! Server state shared across request handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, JoinChatUseCase, LeaveChatUseCase,
    ReactToMessageUseCase, SendMessageUseCase, UpdateMessageUseCase,
};

/// Shared application state
///
/// Holds one use case per protocol event, wired up once in the binary's
/// `main` and injected into the handlers (no ambient singletons).
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub join_chat_usecase: Arc<JoinChatUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub update_message_usecase: Arc<UpdateMessageUseCase>,
    pub react_to_message_usecase: Arc<ReactToMessageUseCase>,
    pub leave_chat_usecase: Arc<LeaveChatUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
}
