//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::entity::Message;
use super::error::StoreError;
use super::value_object::{ConnectionId, MessageId, Username};

/// Message Store trait
///
/// メッセージログへのインターフェース。UseCase 層はこの trait に依存し、
/// Infrastructure 層の具体的な実装には依存しない。永続化が必要になった
/// 場合は、この trait の別実装（append-only log など）を差し込む。
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// メッセージをログ末尾に追加（ID 重複時は `DuplicateId`）
    async fn append(&self, message: Message) -> Result<(), StoreError>;

    /// 同じ ID のメッセージをレコードごと置換（存在しない場合は `NotFound`）
    async fn replace_by_id(&self, message: Message) -> Result<(), StoreError>;

    /// ID でメッセージを取得
    async fn find_by_id(&self, id: &MessageId) -> Option<Message>;

    /// ログ全体の順序付きコピーを取得
    async fn snapshot(&self) -> Vec<Message>;
}

/// Connection Registry trait
///
/// 接続と表示名のマッピング（Roster）へのインターフェース。
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続に表示名を登録
    async fn register(&self, connection_id: ConnectionId, username: Username);

    /// 接続の登録を解除し、登録されていた表示名を返す（冪等）
    async fn deregister(&self, connection_id: &ConnectionId) -> Option<Username>;

    /// 現在登録されている接続数を取得
    async fn count(&self) -> usize;

    /// 接続が join 済みかどうかを取得
    async fn is_registered(&self, connection_id: &ConnectionId) -> bool;
}
