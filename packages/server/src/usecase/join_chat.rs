//! UseCase: 参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinChatUseCase::execute() メソッド
//! - 参加処理（roster への登録、システムメッセージの生成と履歴への追加）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：join 済みの接続は再 join できない
//! - 参加者数が登録後の値で返されることを保証
//! - システムメッセージが履歴に残ることを確認（再接続時の snapshot に含まれる）
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規接続の join
//! - 異常系：join 済み接続からの再 join
//! - エッジケース：同じ表示名での複数接続の join（許容される）

use std::sync::Arc;

use idobata_shared::time::Clock;

use crate::domain::{
    ConnectionId, ConnectionRegistry, Message, MessagePusher, MessageStore, Timestamp, Username,
};

use super::error::JoinError;

/// 参加のユースケース
pub struct JoinChatUseCase {
    /// Message Store（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
    /// Connection Registry（roster の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Clock（システムメッセージのタイムスタンプ用）
    clock: Arc<dyn Clock>,
}

impl JoinChatUseCase {
    /// 新しい JoinChatUseCase を作成
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

    /// 参加を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加する接続の ID
    /// * `username` - 表示名（検証済みの Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok((Message, usize))` - 参加通知のシステムメッセージと参加後の人数
    /// * `Err(JoinError)` - join 済みの接続からの再 join
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        username: Username,
    ) -> Result<(Message, usize), JoinError> {
        // 1. 状態チェック（Connected -> Joined の遷移のみ許可）
        if self.registry.is_registered(connection_id).await {
            return Err(JoinError::InvalidState(connection_id.as_str().to_string()));
        }

        // 2. Roster に登録（表示名の重複チェックは行わない）
        self.registry
            .register(connection_id.clone(), username.clone())
            .await;

        // 3. 参加通知のシステムメッセージを履歴に追加
        let notice = Message::system(
            format!("{} has joined the chat", username),
            Timestamp::new(self.clock.now_millis()),
        );
        if let Err(e) = self.store.append(notice.clone()).await {
            tracing::warn!("Failed to append join notice to history: {}", e);
        }

        // 4. 登録後の参加者数
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
