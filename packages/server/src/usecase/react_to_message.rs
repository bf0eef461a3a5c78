//! UseCase: リアクション処理
//!
//! リアクションのトグル計算はサーバー側で行う（`domain::reaction`）。
//! クライアントは絵文字と自分の表示名だけを送る。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionRegistry, Message, MessageId, MessagePusher, MessageStore,
    reaction::toggle_reaction,
};

use super::error::ReactError;

/// リアクションのユースケース
pub struct ReactToMessageUseCase {
    /// Message Store（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
    /// Connection Registry（roster の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ReactToMessageUseCase {
    /// 新しい ReactToMessageUseCase を作成
    pub fn new(
        store: Arc<dyn MessageStore>,
        registry: Arc<dyn ConnectionRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            store,
            registry,
            message_pusher,
        }
    }

    /// リアクションのトグルを実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 送信元の接続 ID
    /// * `message_id` - 対象メッセージの ID
    /// * `emoji` - トグルする絵文字
    /// * `username` - リアクションする人の表示名（ペイロードの値をそのまま使用）
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - トグル反映後のメッセージ（ブロードキャスト用）
    /// * `Err(ReactError)` - join 前の送信、または対象が存在しない
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        message_id: &MessageId,
        emoji: &str,
        username: &str,
    ) -> Result<Message, ReactError> {
        // 1. 状態チェック（Joined のみリアクション可能）
        if !self.registry.is_registered(connection_id).await {
            return Err(ReactError::InvalidState(
                connection_id.as_str().to_string(),
            ));
        }

        // 2. 対象メッセージを取得
        let current = self
            .store
            .find_by_id(message_id)
            .await
            .ok_or_else(|| ReactError::NotFound(message_id.as_str().to_string()))?;

        // 3. トグルを計算して置換
        let updated = toggle_reaction(&current, emoji, username);
        self.store
            .replace_by_id(updated.clone())
            .await
            .map_err(|_| ReactError::NotFound(message_id.as_str().to_string()))?;

        Ok(updated)
    }

    /// イベントを接続中の全クライアントにブロードキャスト
    pub async fn broadcast(&self, message: &str) -> Result<(), String> {
        self.message_pusher
            .broadcast(message)
            .await
            .map_err(|e| e.to_string())
    }
}
