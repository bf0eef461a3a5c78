//! InMemory repository 実装
//!
//! ドメイン層が定義する trait の具体的な実装。プロセスローカルなメモリを
//! ストレージとして使用します（永続化しないため、再起動で全て消える）。

mod message_store;
mod registry;

pub use message_store::InMemoryMessageStore;
pub use registry::InMemoryConnectionRegistry;
