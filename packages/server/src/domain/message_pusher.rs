//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ送信のインターフェースを定義します。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ConnectionId;

/// Channel used to push serialized events to a single connection.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Message Pusher trait
///
/// 接続ごとの送信チャンネルを管理し、単一送信とブロードキャストを行う。
/// ブロードキャストは接続中の全クライアント（join 前の接続と送信元を含む）
/// に配信される。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定の接続にメッセージを送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// 接続中の全クライアントにメッセージを送信（一部の失敗は許容）
    async fn broadcast(&self, content: &str) -> Result<(), MessagePushError>;
}
