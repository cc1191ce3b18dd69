//! Role-tagged messages sent to the completion endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Completion roles used by this service.
///
/// `Developer` carries the stable framework instructions and is always the
/// first message of a sequence when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Developer,
    User,
    Assistant,
}

/// One message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn developer(content: impl Into<String>) -> Self {
        Self {
            role: Role::Developer,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A prior conversation turn supplied by the caller.
///
/// Opaque beyond its role: turns are appended to the message sequence in
/// the order received, never reordered or rewritten.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl From<&ChatTurn> for Message {
    fn from(turn: &ChatTurn) -> Self {
        let role = match turn.role.as_str() {
            "assistant" => Role::Assistant,
            "developer" | "system" => Role::Developer,
            _ => Role::User,
        };
        Self {
            role,
            content: turn.content.clone(),
        }
    }
}
