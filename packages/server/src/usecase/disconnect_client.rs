//! UseCase: 切断処理
//!
//! トランスポート切断時の後始末。送信チャンネルの登録解除は join の有無に
//! かかわらず行い、roster の登録解除と退出通知は join 済みの場合のみ行う。
//! 明示的な `leave` の後の切断では roster はすでに空なので通知は出ない。

use std::sync::Arc;

use idobata_shared::time::Clock;

use crate::domain::{
    ConnectionId, ConnectionRegistry, Message, MessagePusher, MessageStore, Timestamp,
};

/// 切断のユースケース
pub struct DisconnectClientUseCase {
    /// Message Store（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
    /// Connection Registry（roster の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Clock（システムメッセージのタイムスタンプ用）
    clock: Arc<dyn Clock>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
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

    /// 切断の後始末を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 切断された接続の ID
    ///
    /// # Returns
    ///
    /// * `Some((Message, usize))` - join 済みだった場合、退出通知と残りの人数
    /// * `None` - join していなかった場合（接続の破棄のみ）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<(Message, usize)> {
        // 1. 送信チャンネルを登録解除（以降のブロードキャスト対象から外す）
        self.message_pusher.unregister_client(connection_id).await;

        // 2. Roster から登録解除（join していなければここで終わり）
        let username = self.registry.deregister(connection_id).await?;

        // 3. 退出通知のシステムメッセージを履歴に追加
        let notice = Message::system(
            format!("{} has left the chat", username),
            Timestamp::new(self.clock.now_millis()),
        );
        if let Err(e) = self.store.append(notice.clone()).await {
            tracing::warn!("Failed to append leave notice to history: {}", e);
        }

        // 4. 残りの参加者数
        let count = self.registry.count().await;

        Some((notice, count))
    }

    /// イベントを残りの接続にブロードキャスト
    pub async fn broadcast(&self, message: &str) -> Result<(), String> {
        self.message_pusher
            .broadcast(message)
            .await
            .map_err(|e| e.to_string())
    }
}
