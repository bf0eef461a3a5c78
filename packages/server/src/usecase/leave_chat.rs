//! UseCase: 退出処理
//!
//! 明示的な `leave` イベントの処理。接続自体は開いたままなので
//! MessagePusher のチャンネルは登録解除しない（切断は別ユースケース）。
//! ペイロードの表示名は使わず、roster に登録された名前を正とする。

use std::sync::Arc;

use idobata_shared::time::Clock;

use crate::domain::{
    ConnectionId, ConnectionRegistry, Message, MessagePusher, MessageStore, Timestamp,
};

use super::error::LeaveError;

/// 退出のユースケース
pub struct LeaveChatUseCase {
    /// Message Store（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
    /// Connection Registry（roster の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Clock（システムメッセージのタイムスタンプ用）
    clock: Arc<dyn Clock>,
}

impl LeaveChatUseCase {
    /// 新しい LeaveChatUseCase を作成
    pub fn new(
        store: Arc<dyn MessageStore>,
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            registry,
            message_pusher,
            clock,
        }
    }

    /// 退出を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 退出する接続の ID
    ///
    /// # Returns
    ///
    /// * `Ok((Message, usize))` - 退出通知のシステムメッセージと退出後の人数
    /// * `Err(LeaveError)` - join していない接続からの退出
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<(Message, usize), LeaveError> {
        // 1. Roster から登録解除（未登録なら破棄、冪等）
        let username = self
            .registry
            .deregister(connection_id)
            .await
            .ok_or_else(|| LeaveError::InvalidState(connection_id.as_str().to_string()))?;

        // 2. 退出通知のシステムメッセージを履歴に追加
        let notice = Message::system(
            format!("{} has left the chat", username),
            Timestamp::new(self.clock.now_millis()),
        );
        if let Err(e) = self.store.append(notice.clone()).await {
            tracing::warn!("Failed to append leave notice to history: {}", e);
        }

        // 3. 登録解除後の参加者数
        let count = self.registry.count().await;

        Ok((notice, count))
    }

    /// イベントを接続中の全クライアントにブロードキャスト
    pub async fn broadcast(&self, message: &str) -> Result<(), String> {
        self.message_pusher
            .broadcast(message)
            .await
            .map_err(|e| e.to_string())
    }
}
