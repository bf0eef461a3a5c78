//! Real-time group chat relay server.
//!
//! Fans out messages, polls, and reactions to all connected clients and
//! keeps a single consistent message history and roster.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin idobata-server
//! cargo run --bin idobata-server -- --host 0.0.0.0 --port 3000
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use tokio::sync::Mutex;

use idobata_server::{
    domain::{MessageLog, Roster},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryConnectionRegistry, InMemoryMessageStore},
    },
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, JoinChatUseCase, LeaveChatUseCase,
        ReactToMessageUseCase, SendMessageUseCase, UpdateMessageUseCase,
    },
};
use idobata_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "idobata-server")]
#[command(about = "Real-time group chat relay with broadcast support", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. MessagePusher
    // 3. Clock
    // 4. UseCases
    // 5. Server

    // 1. Create repositories (in-memory; the whole state is volatile)
    let store = Arc::new(InMemoryMessageStore::new(Arc::new(Mutex::new(
        MessageLog::new(),
    ))));
    let registry = Arc::new(InMemoryConnectionRegistry::new(Arc::new(Mutex::new(
        Roster::new(),
    ))));

    // 2. Create MessagePusher (WebSocket implementation)
    let pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(pusher_clients));

    // 3. Create Clock
    let clock = Arc::new(SystemClock);

    // 4. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        store.clone(),
        message_pusher.clone(),
    ));
    let join_chat_usecase = Arc::new(JoinChatUseCase::new(
        store.clone(),
        registry.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        store.clone(),
        registry.clone(),
        message_pusher.clone(),
    ));
    let update_message_usecase = Arc::new(UpdateMessageUseCase::new(
        store.clone(),
        registry.clone(),
        message_pusher.clone(),
    ));
    let react_to_message_usecase = Arc::new(ReactToMessageUseCase::new(
        store.clone(),
        registry.clone(),
        message_pusher.clone(),
    ));
    let leave_chat_usecase = Arc::new(LeaveChatUseCase::new(
        store.clone(),
        registry.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
        store.clone(),
        registry.clone(),
        message_pusher.clone(),
        clock.clone(),
    ));

    // 5. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        join_chat_usecase,
        send_message_usecase,
        update_message_usecase,
        react_to_message_usecase,
        leave_chat_usecase,
        disconnect_client_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
