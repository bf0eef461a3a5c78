//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, JoinChatUseCase, LeaveChatUseCase,
    ReactToMessageUseCase, SendMessageUseCase, UpdateMessageUseCase,
};

use super::{
    handler::{health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat relay server
///
/// Encapsulates the wired-up use cases and provides a method to run the
/// server until shutdown.
pub struct Server {
    connect_client_usecase: Arc<ConnectClientUseCase>,
    join_chat_usecase: Arc<JoinChatUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    update_message_usecase: Arc<UpdateMessageUseCase>,
    react_to_message_usecase: Arc<ReactToMessageUseCase>,
    leave_chat_usecase: Arc<LeaveChatUseCase>,
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
}

impl Server {
    /// Create a new Server instance from the wired-up use cases
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        join_chat_usecase: Arc<JoinChatUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        update_message_usecase: Arc<UpdateMessageUseCase>,
        react_to_message_usecase: Arc<ReactToMessageUseCase>,
        leave_chat_usecase: Arc<LeaveChatUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    ) -> Self {
        Self {
            connect_client_usecase,
            join_chat_usecase,
            send_message_usecase,
            update_message_usecase,
            react_to_message_usecase,
            leave_chat_usecase,
            disconnect_client_usecase,
        }
    }

    /// Run the chat relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address
    /// or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            connect_client_usecase: self.connect_client_usecase,
            join_chat_usecase: self.join_chat_usecase,
            send_message_usecase: self.send_message_usecase,
            update_message_usecase: self.update_message_usecase,
            react_to_message_usecase: self.react_to_message_usecase,
            leave_chat_usecase: self.leave_chat_usecase,
            disconnect_client_usecase: self.disconnect_client_usecase,
        });

        // Define handlers
        let app = Router::new()
            .route("/ws", get(websocket_handler))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Chat relay listening on {}", listener.local_addr()?);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
