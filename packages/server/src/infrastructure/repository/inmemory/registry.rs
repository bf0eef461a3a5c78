//! InMemory Connection Registry 実装
//!
//! ドメイン層の `Roster` エンティティを Mutex で保護して保持します。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, ConnectionRegistry, Roster, Username};

/// インメモリ Connection Registry 実装
pub struct InMemoryConnectionRegistry {
    roster: Arc<Mutex<Roster>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい InMemoryConnectionRegistry を作成
    pub fn new(roster: Arc<Mutex<Roster>>) -> Self {
        Self { roster }
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, connection_id: ConnectionId, username: Username) {
        let mut roster = self.roster.lock().await;
        roster.register(connection_id, username);
    }

    async fn deregister(&self, connection_id: &ConnectionId) -> Option<Username> {
        let mut roster = self.roster.lock().await;
        roster.deregister(connection_id)
    }

    async fn count(&self) -> usize {
        let roster = self.roster.lock().await;
        roster.count()
    }

    async fn is_registered(&self, connection_id: &ConnectionId) -> bool {
        let roster = self.roster.lock().await;
        roster.contains(connection_id)
    }
}
