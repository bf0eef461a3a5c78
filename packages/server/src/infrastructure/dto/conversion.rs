//! Conversion logic between DTOs and domain entities.
//!
//! Inbound conversion is fallible: a record with an empty id is rejected so
//! the router can drop the event. The reactions map is canonicalized on the
//! way in (empty name lists and an empty map collapse to absent), which
//! keeps the domain representation toggle-friendly.

use std::collections::HashMap;

use crate::domain::{
    Message, PollOption, ValidationError,
    value_object::{MessageId, Timestamp},
};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::PollOptionDto> for PollOption {
    fn from(dto: dto::PollOptionDto) -> Self {
        Self {
            id: dto.id,
            text: dto.text,
            votes: dto.votes,
        }
    }
}

impl TryFrom<dto::MessageDto> for Message {
    type Error = ValidationError;

    fn try_from(dto: dto::MessageDto) -> Result<Self, Self::Error> {
        let reply_to = dto.reply_to.map(MessageId::new).transpose()?;
        Ok(Self {
            id: MessageId::new(dto.id)?,
            text: dto.text,
            username: dto.username,
            timestamp: Timestamp::new(dto.timestamp),
            reply_to,
            reactions: canonicalize_reactions(dto.reactions),
            is_poll: dto.is_poll,
            poll_options: dto
                .poll_options
                .map(|options| options.into_iter().map(Into::into).collect()),
        })
    }
}

fn canonicalize_reactions(
    reactions: Option<HashMap<String, Vec<String>>>,
) -> Option<HashMap<String, Vec<String>>> {
    let map: HashMap<String, Vec<String>> = reactions?
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .collect();
    if map.is_empty() { None } else { Some(map) }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<PollOption> for dto::PollOptionDto {
    fn from(model: PollOption) -> Self {
        Self {
            id: model.id,
            text: model.text,
            votes: model.votes,
        }
    }
}

impl From<Message> for dto::MessageDto {
    fn from(model: Message) -> Self {
        Self {
            id: model.id.into_string(),
            text: model.text,
            username: model.username,
            timestamp: model.timestamp.value(),
            reply_to: model.reply_to.map(MessageId::into_string),
            reactions: model.reactions,
            is_poll: model.is_poll,
            poll_options: model
                .poll_options
                .map(|options| options.into_iter().map(Into::into).collect()),
        }
    }
}
