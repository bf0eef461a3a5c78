//! Pure reaction-toggling logic for chat messages.
//!
//! No side effects: the caller commits the returned message to the log and
//! broadcasts it.

use super::entity::Message;

/// Toggle an actor's emoji reaction on a message, producing a new message
/// value.
///
/// A strict toggle: applying it twice with the same arguments returns the
/// message to its original state. An emoji key whose last reactor is
/// removed is deleted entirely, and an empty reactions map collapses to
/// absent.
pub fn toggle_reaction(message: &Message, emoji: &str, actor: &str) -> Message {
    let mut reactions = message.reactions.clone().unwrap_or_default();

    match reactions.get_mut(emoji) {
        Some(names) if names.iter().any(|n| n == actor) => {
            names.retain(|n| n != actor);
            if names.is_empty() {
                reactions.remove(emoji);
            }
        }
        Some(names) => {
            names.push(actor.to_string());
        }
        None => {
            reactions.insert(emoji.to_string(), vec![actor.to_string()]);
        }
    }

    Message {
        reactions: if reactions.is_empty() {
            None
        } else {
            Some(reactions)
        },
        ..message.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::value_object::{MessageId, Timestamp};

    fn create_message(reactions: Option<HashMap<String, Vec<String>>>) -> Message {
        Message {
            id: MessageId::new("1".to_string()).unwrap(),
            text: "hi".to_string(),
            username: "alice".to_string(),
            timestamp: Timestamp::new(1000),
            reply_to: None,
            reactions,
            is_poll: None,
            poll_options: None,
        }
    }

    fn reactions(entries: Vec<(&str, Vec<&str>)>) -> HashMap<String, Vec<String>> {
        entries
            .into_iter()
            .map(|(emoji, names)| {
                (
                    emoji.to_string(),
                    names.into_iter().map(String::from).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_react_creates_emoji_key_with_sole_member() {
        // テスト項目: 未知の絵文字へのリアクションでキーが作成される
        // given (前提条件):
        let message = create_message(None);

        // when (操作):
        let reacted = toggle_reaction(&message, "👍", "bob");

        // then (期待する結果):
        assert_eq!(
            reacted.reactions,
            Some(reactions(vec![("👍", vec!["bob"])]))
        );
    }

    #[test]
    fn test_react_adds_actor_to_existing_emoji() {
        // テスト項目: 既存の絵文字キーにリアクションした人が追加される
        // given (前提条件):
        let message = create_message(Some(reactions(vec![("👍", vec!["alice"])])));

        // when (操作):
        let reacted = toggle_reaction(&message, "👍", "bob");

        // then (期待する結果):
        assert_eq!(
            reacted.reactions,
            Some(reactions(vec![("👍", vec!["alice", "bob"])]))
        );
    }

    #[test]
    fn test_react_removes_existing_member() {
        // テスト項目: リアクション済みの絵文字への再リアクションで自分が削除される
        // given (前提条件):
        let message = create_message(Some(reactions(vec![("👍", vec!["alice", "bob"])])));

        // when (操作):
        let reacted = toggle_reaction(&message, "👍", "bob");

        // then (期待する結果):
        assert_eq!(
            reacted.reactions,
            Some(reactions(vec![("👍", vec!["alice"])]))
        );
    }

    #[test]
    fn test_react_deletes_emoji_key_when_last_member_leaves() {
        // テスト項目: 最後のリアクションが外れたとき絵文字キーごと削除される
        // given (前提条件):
        let message = create_message(Some(reactions(vec![
            ("👍", vec!["bob"]),
            ("🎉", vec!["alice"]),
        ])));

        // when (操作):
        let reacted = toggle_reaction(&message, "👍", "bob");

        // then (期待する結果):
        assert_eq!(reacted.reactions, Some(reactions(vec![("🎉", vec!["alice"])])));
    }

    #[test]
    fn test_react_twice_is_identity() {
        // テスト項目: 同じ引数で 2 回適用すると元のメッセージに戻る
        // given (前提条件):
        let message = create_message(None);

        // when (操作):
        let once = toggle_reaction(&message, "❤️", "alice");
        let twice = toggle_reaction(&once, "❤️", "alice");

        // then (期待する結果):
        assert_eq!(twice, message);
    }

    #[test]
    fn test_react_twice_is_identity_with_existing_reactions() {
        // テスト項目: 既存のリアクションがある場合も 2 回適用で元に戻る
        // given (前提条件):
        let message = create_message(Some(reactions(vec![("👍", vec!["charlie"])])));

        // when (操作):
        let once = toggle_reaction(&message, "👍", "alice");
        let twice = toggle_reaction(&once, "👍", "alice");

        // then (期待する結果):
        assert_eq!(twice, message);
    }
}
