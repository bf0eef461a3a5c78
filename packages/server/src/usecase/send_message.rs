//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージ送信処理（join 状態の検証、履歴への追加）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：join 前の接続からの送信は破棄される
//! - ID 重複時に履歴が上書きされないことを保証（上書きではなく拒否）
//!
//! ### どのような状況を想定しているか
//! - 正常系：join 済みの接続からの送信
//! - 異常系：join 前の送信、ID 重複
//! - エッジケース：poll メッセージの送信

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, Message, MessagePusher, MessageStore};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Message Store（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
    /// Connection Registry（roster の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
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

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 送信元の接続 ID
    /// * `message` - 送信するメッセージ（Domain Model、ID はクライアント生成）
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - 履歴に追加されたメッセージ（ブロードキャスト用）
    /// * `Err(SendMessageError)` - join 前の送信、または ID 重複
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        message: Message,
    ) -> Result<Message, SendMessageError> {
        // 1. 状態チェック（Joined のみ送信可能）
        if !self.registry.is_registered(connection_id).await {
            return Err(SendMessageError::InvalidState(
                connection_id.as_str().to_string(),
            ));
        }

        // 2. 履歴に追加（ID 重複は拒否して破棄）
        let message_id = message.id.as_str().to_string();
        self.store
            .append(message.clone())
            .await
            .map_err(|_| SendMessageError::DuplicateId(message_id))?;

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
