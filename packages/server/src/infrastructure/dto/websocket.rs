//! WebSocket event DTOs.
//!
//! Every event is a JSON object tagged by a camelCase `type` field. Message
//! records use the field names the view layer expects (`replyTo`, `isPoll`,
//! `pollOptions`); absent optional fields are omitted on output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A poll option on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOptionDto {
    pub id: String,
    pub text: String,
    pub votes: Vec<String>,
}

/// A chat message record on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    pub text: String,
    pub username: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_poll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_options: Option<Vec<PollOptionDto>>,
}

/// Payload of the inbound `reaction` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPayload {
    pub message_id: String,
    pub emoji: String,
    pub username: String,
}

/// Inbound events (client -> server).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Attach a display name to this connection.
    Join { username: String },
    /// Publish a new message (normal or poll).
    Message(MessageDto),
    /// Replace an existing message record by id.
    MessageUpdate(MessageDto),
    /// Toggle an emoji reaction on a message.
    Reaction(ReactionPayload),
    /// Detach the display name; the connection stays open.
    Leave { username: String },
}

/// Outbound events (server -> client).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Full ordered message history, sent to a newly connected client only.
    PreviousMessages { messages: Vec<MessageDto> },
    /// Live participant count.
    UserCount { count: usize },
    /// A newly appended message.
    Message(MessageDto),
    /// A replaced message record.
    MessageUpdate(MessageDto),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_event_deserializes_from_tagged_json() {
        // テスト項目: join イベントの JSON が正しくパースされる
        // given (前提条件):
        let json = r#"{"type":"join","username":"alice"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::Join {
                username: "alice".to_string()
            }
        );
    }

    #[test]
    fn test_message_event_deserializes_without_optional_fields() {
        // テスト項目: 任意フィールドなしの message イベントがパースされる
        // given (前提条件):
        let json = r#"{"type":"message","id":"1","text":"hi","username":"alice","timestamp":1000}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        let ClientEvent::Message(message) = event else {
            panic!("expected message event");
        };
        assert_eq!(message.id, "1");
        assert_eq!(message.reply_to, None);
        assert_eq!(message.reactions, None);
        assert_eq!(message.is_poll, None);
        assert_eq!(message.poll_options, None);
    }

    #[test]
    fn test_reaction_event_uses_camel_case_fields() {
        // テスト項目: reaction イベントのフィールド名が camelCase でパースされる
        // given (前提条件):
        let json = r#"{"type":"reaction","messageId":"1","emoji":"👍","username":"bob"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::Reaction(ReactionPayload {
                message_id: "1".to_string(),
                emoji: "👍".to_string(),
                username: "bob".to_string(),
            })
        );
    }

    #[test]
    fn test_poll_message_roundtrips() {
        // テスト項目: poll メッセージがシリアライズ・デシリアライズで往復できる
        // given (前提条件):
        let message = MessageDto {
            id: "poll-1".to_string(),
            text: "Lunch?".to_string(),
            username: "alice".to_string(),
            timestamp: 1000,
            reply_to: None,
            reactions: None,
            is_poll: Some(true),
            poll_options: Some(vec![PollOptionDto {
                id: "opt-a".to_string(),
                text: "Ramen".to_string(),
                votes: vec!["bob".to_string()],
            }]),
        };
        let event = ClientEvent::MessageUpdate(message.clone());

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();
        let parsed: ClientEvent = serde_json::from_str(&json).unwrap();

        // then (期待する結果):
        assert!(json.contains(r#""type":"messageUpdate""#));
        assert!(json.contains(r#""isPoll":true"#));
        assert!(json.contains(r#""pollOptions""#));
        assert_eq!(parsed, ClientEvent::MessageUpdate(message));
    }

    #[test]
    fn test_server_message_event_omits_absent_optional_fields() {
        // テスト項目: 値のない任意フィールドが出力から省略される
        // given (前提条件):
        let event = ServerEvent::Message(MessageDto {
            id: "1".to_string(),
            text: "hi".to_string(),
            username: "alice".to_string(),
            timestamp: 1000,
            reply_to: None,
            reactions: None,
            is_poll: None,
            poll_options: None,
        });

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();

        // then (期待する結果):
        assert!(json.contains(r#""type":"message""#));
        assert!(!json.contains("replyTo"));
        assert!(!json.contains("reactions"));
        assert!(!json.contains("isPoll"));
        assert!(!json.contains("pollOptions"));
    }

    #[test]
    fn test_user_count_event_serializes_with_tag() {
        // テスト項目: userCount イベントが type タグ付きでシリアライズされる
        // given (前提条件):
        let event = ServerEvent::UserCount { count: 2 };

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"type":"userCount","count":2}"#);
    }

    #[test]
    fn test_previous_messages_event_serializes_message_list() {
        // テスト項目: previousMessages イベントがメッセージ配列を持つ
        // given (前提条件):
        let event = ServerEvent::PreviousMessages { messages: vec![] };

        // when (操作):
        let json = serde_json::to_string(&event).unwrap();

        // then (期待する結果):
        assert_eq!(json, r#"{"type":"previousMessages","messages":[]}"#);
    }

    #[test]
    fn test_unknown_event_type_fails_to_parse() {
        // テスト項目: 未知のイベント種別がパースエラーになる
        // given (前提条件):
        let json = r#"{"type":"shout","username":"alice"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
