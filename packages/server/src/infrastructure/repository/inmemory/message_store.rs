//! InMemory Message Store 実装
//!
//! ドメイン層の `MessageLog` エンティティを Mutex で保護して保持します。
//! 各操作はロックの下で完結するため、スナップショットが途中状態を
//! 観測することはありません。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Message, MessageId, MessageLog, MessageStore, StoreError};

/// インメモリ Message Store 実装
pub struct InMemoryMessageStore {
    log: Arc<Mutex<MessageLog>>,
}

impl InMemoryMessageStore {
    /// 新しい InMemoryMessageStore を作成
    pub fn new(log: Arc<Mutex<MessageLog>>) -> Self {
        Self { log }
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(&self, message: Message) -> Result<(), StoreError> {
        let mut log = self.log.lock().await;
        log.append(message)
    }

    async fn replace_by_id(&self, message: Message) -> Result<(), StoreError> {
        let mut log = self.log.lock().await;
        log.replace_by_id(message)
    }

    async fn find_by_id(&self, id: &MessageId) -> Option<Message> {
        let log = self.log.lock().await;
        log.find_by_id(id).cloned()
    }

    async fn snapshot(&self) -> Vec<Message> {
        let log = self.log.lock().await;
        log.snapshot()
    }
}
