//! UseCase: クライアント接続処理
//!
//! 接続の送信チャンネルを登録し、新規接続にメッセージ履歴の
//! スナップショットを送る。roster には触れない（join は別イベント）。

use std::sync::Arc;

use crate::domain::{ConnectionId, Message, MessagePusher, MessageStore, PusherChannel};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// Message Store（データアクセス層の抽象化）
    store: Arc<dyn MessageStore>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(store: Arc<dyn MessageStore>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            store,
            message_pusher,
        }
    }

    /// 接続を受け付ける
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 新規接続の ID（サーバー生成）
    /// * `sender` - この接続へのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// この時点までのメッセージ履歴のスナップショット（挿入順）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Vec<Message> {
        // 1. MessagePusher にチャンネルを登録（以降のブロードキャスト対象になる）
        self.message_pusher
            .register_client(connection_id, sender)
            .await;

        // 2. スナップショットを取得（登録後に読むので取りこぼしがない）
        self.store.snapshot().await
    }

    /// スナップショットをこの接続だけに送信
    pub async fn push_snapshot(
        &self,
        connection_id: &ConnectionId,
        message: &str,
    ) -> Result<(), String> {
        self.message_pusher
            .push_to(connection_id, message)
            .await
            .map_err(|e| e.to_string())
    }
}
