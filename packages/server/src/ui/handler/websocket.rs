//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, MessageId, Username},
    infrastructure::dto::websocket::{ClientEvent, MessageDto, ServerEvent},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Connection ids are owned by the transport: generated here, never
    // supplied by the client.
    let connection_id = ConnectionIdFactory::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Spawns a task that receives events from the rx channel and pushes them to
/// the WebSocket sender.
///
/// This handles the outbound flow: everything addressed to this client (the
/// history snapshot and all broadcasts) arrives through the rx channel.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the event to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive events
    let (tx, rx) = mpsc::unbounded_channel();

    // Register the connection and read the history snapshot
    let snapshot = state
        .connect_client_usecase
        .execute(connection_id.clone(), tx)
        .await;

    // Send previousMessages to the newly connected client only
    let messages: Vec<MessageDto> = snapshot.into_iter().map(Into::into).collect();
    let snapshot_json = serde_json::to_string(&ServerEvent::PreviousMessages { messages }).unwrap();
    if let Err(e) = state
        .connect_client_usecase
        .push_snapshot(&connection_id, &snapshot_json)
        .await
    {
        tracing::error!(
            "Failed to send previous messages to '{}': {}",
            connection_id.as_str(),
            e
        );
    } else {
        tracing::info!("Sent previous messages to '{}'", connection_id.as_str());
    }

    // Spawn a task to push queued events to this client
    let mut send_task = pusher_loop(rx, sender);

    let connection_id_clone = connection_id.clone();
    let state_clone = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received event: {}", text);
                    handle_client_event(&state_clone, &connection_id_clone, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!(
                        "Connection '{}' requested close",
                        connection_id_clone.as_str()
                    );
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Unregister the connection; if it had joined, notify the remaining
    // clients of the departure and the new count
    if let Some((notice, count)) = state
        .disconnect_client_usecase
        .execute(&connection_id)
        .await
    {
        let count_json = serde_json::to_string(&ServerEvent::UserCount { count }).unwrap();
        if let Err(e) = state.disconnect_client_usecase.broadcast(&count_json).await {
            tracing::warn!("Failed to broadcast user count: {}", e);
        }

        let notice_json = serde_json::to_string(&ServerEvent::Message(notice.into())).unwrap();
        if let Err(e) = state.disconnect_client_usecase.broadcast(&notice_json).await {
            tracing::warn!("Failed to broadcast leave notice: {}", e);
        }

        tracing::info!(
            "Connection '{}' disconnected, {} participant(s) remaining",
            connection_id.as_str(),
            count
        );
    } else {
        tracing::info!(
            "Connection '{}' disconnected before joining",
            connection_id.as_str()
        );
    }
}

/// Dispatch a single inbound event to its use case.
///
/// Malformed and out-of-state events are dropped with a warning; no error
/// is reported back to the originating client.
async fn handle_client_event(state: &Arc<AppState>, connection_id: &ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Failed to parse client event as JSON: {}", e);
            return;
        }
    };

    match event {
        ClientEvent::Join { username } => {
            let username = match Username::new(username) {
                Ok(username) => username,
                Err(e) => {
                    tracing::warn!(
                        "Dropped join event from '{}': {}",
                        connection_id.as_str(),
                        e
                    );
                    return;
                }
            };

            match state
                .join_chat_usecase
                .execute(connection_id, username)
                .await
            {
                Ok((notice, count)) => {
                    let count_json =
                        serde_json::to_string(&ServerEvent::UserCount { count }).unwrap();
                    if let Err(e) = state.join_chat_usecase.broadcast(&count_json).await {
                        tracing::warn!("Failed to broadcast user count: {}", e);
                    }

                    let notice_json =
                        serde_json::to_string(&ServerEvent::Message(notice.into())).unwrap();
                    if let Err(e) = state.join_chat_usecase.broadcast(&notice_json).await {
                        tracing::warn!("Failed to broadcast join notice: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Dropped join event: {}", e);
                }
            }
        }
        ClientEvent::Message(dto) => {
            let message = match crate::domain::Message::try_from(dto) {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("Dropped malformed message event: {}", e);
                    return;
                }
            };

            match state
                .send_message_usecase
                .execute(connection_id, message)
                .await
            {
                Ok(message) => {
                    let json =
                        serde_json::to_string(&ServerEvent::Message(message.into())).unwrap();
                    if let Err(e) = state.send_message_usecase.broadcast(&json).await {
                        tracing::warn!("Failed to broadcast message: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Dropped message event: {}", e);
                }
            }
        }
        ClientEvent::MessageUpdate(dto) => {
            let message = match crate::domain::Message::try_from(dto) {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("Dropped malformed messageUpdate event: {}", e);
                    return;
                }
            };

            match state
                .update_message_usecase
                .execute(connection_id, message)
                .await
            {
                Ok(message) => {
                    let json =
                        serde_json::to_string(&ServerEvent::MessageUpdate(message.into()))
                            .unwrap();
                    if let Err(e) = state.update_message_usecase.broadcast(&json).await {
                        tracing::warn!("Failed to broadcast message update: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Dropped messageUpdate event: {}", e);
                }
            }
        }
        ClientEvent::Reaction(payload) => {
            let message_id = match MessageId::new(payload.message_id) {
                Ok(message_id) => message_id,
                Err(e) => {
                    tracing::warn!("Dropped malformed reaction event: {}", e);
                    return;
                }
            };

            match state
                .react_to_message_usecase
                .execute(connection_id, &message_id, &payload.emoji, &payload.username)
                .await
            {
                Ok(updated) => {
                    let json =
                        serde_json::to_string(&ServerEvent::MessageUpdate(updated.into()))
                            .unwrap();
                    if let Err(e) = state.react_to_message_usecase.broadcast(&json).await {
                        tracing::warn!("Failed to broadcast message update: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Dropped reaction event: {}", e);
                }
            }
        }
        ClientEvent::Leave { username } => {
            tracing::info!(
                "Connection '{}' requested leave as '{}'",
                connection_id.as_str(),
                username
            );

            // The payload name is informational only; the roster entry is
            // keyed by connection id and its registered name is authoritative.
            match state.leave_chat_usecase.execute(connection_id).await {
                Ok((notice, count)) => {
                    let count_json =
                        serde_json::to_string(&ServerEvent::UserCount { count }).unwrap();
                    if let Err(e) = state.leave_chat_usecase.broadcast(&count_json).await {
                        tracing::warn!("Failed to broadcast user count: {}", e);
                    }

                    let notice_json =
                        serde_json::to_string(&ServerEvent::Message(notice.into())).unwrap();
                    if let Err(e) = state.leave_chat_usecase.broadcast(&notice_json).await {
                        tracing::warn!("Failed to broadcast leave notice: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Dropped leave event: {}", e);
                }
            }
        }
    }
}
