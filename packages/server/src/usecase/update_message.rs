//! UseCase: メッセージ更新処理
//!
//! クライアントから送られた完全なレコードで既存メッセージを置き換える。
//! 投票の反映（vote toggle 済みの poll メッセージ）はこの経路で届く。

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, Message, MessagePusher, MessageStore};

use super::error::UpdateMessageError;

/// メッセージ更新のユースケース
pub struct UpdateMessageUseCase {
    /// Message Store（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
    /// Connection Registry（roster の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl UpdateMessageUseCase {
    /// 新しい UpdateMessageUseCase を作成
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

    /// メッセージ更新を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 送信元の接続 ID
    /// * `message` - 置き換え後の完全なレコード（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 置き換えられたメッセージ（ブロードキャスト用）
    /// * `Err(UpdateMessageError)` - join 前の送信、または対象が存在しない
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        message: Message,
    ) -> Result<Message, UpdateMessageError> {
        // 1. 状態チェック（Joined のみ更新可能）
        if !self.registry.is_registered(connection_id).await {
            return Err(UpdateMessageError::InvalidState(
                connection_id.as_str().to_string(),
            ));
        }

        // 2. レコードごと置換（対象がなければ破棄、ブロードキャストしない）
        let message_id = message.id.as_str().to_string();
        self.store
            .replace_by_id(message.clone())
            .await
            .map_err(|_| UpdateMessageError::NotFound(message_id))?;

        Ok(message)
    }

    /// イベントを接続中の全クライアントにブロードキャスト
    pub async fn broadcast(&self, message: &str) -> Result<(), String> {
        self.message_pusher
            .broadcast(message)
            .await
            .map_err(|e| e.to_string())
    }
}
