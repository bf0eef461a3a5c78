//! Infrastructure layer: concrete implementations of the domain's
//! repository and pusher traits, plus wire DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
