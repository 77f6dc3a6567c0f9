//! Lifecycle events published to the surrounding system.
//!
//! Presentation and notification layers subscribe to these via the
//! [`bus::EventBus`]; every event carries the acting user from the ambient
//! request context plus the resulting aggregate snapshot.

pub mod bus;

use serde::{Deserialize, Serialize};

use omnichat_types::chat::Chat;

use crate::chat::dto::CreateChatDto;

/// The authenticated user a mutation is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingUser {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
}

impl ActingUser {
    pub fn new(id: u32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Events emitted by chat use cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    Created {
        user: ActingUser,
        data: CreateChatDto,
        result: Chat,
    },
    Updated {
        user: ActingUser,
        result: Chat,
    },
    Deleted {
        user: ActingUser,
        result: Chat,
    },
}

impl ChatEvent {
    /// The aggregate the event is about.
    pub fn chat(&self) -> &Chat {
        match self {
            ChatEvent::Created { result, .. }
            | ChatEvent::Updated { result, .. }
            | ChatEvent::Deleted { result, .. } => result,
        }
    }

    pub fn user(&self) -> &ActingUser {
        match self {
            ChatEvent::Created { user, .. }
            | ChatEvent::Updated { user, .. }
            | ChatEvent::Deleted { user, .. } => user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_event_serde_roundtrip() {
        let dto = CreateChatDto { client_id: 7 };
        let event = ChatEvent::Created {
            user: ActingUser::new(1, "Sam", "Agent"),
            data: dto.clone(),
            result: dto.to_entity(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"created\""));
        let parsed: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.chat().client_id(), 7);
        assert_eq!(parsed.user().first_name, "Sam");
    }

    #[test]
    fn test_event_accessors_cover_all_variants() {
        let user = ActingUser::new(2, "A", "B");
        let chat = Chat::new(4);
        for event in [
            ChatEvent::Updated {
                user: user.clone(),
                result: chat.clone(),
            },
            ChatEvent::Deleted {
                user: user.clone(),
                result: chat.clone(),
            },
        ] {
            assert_eq!(event.chat().client_id(), 4);
            assert_eq!(event.user().id, 2);
        }
    }
}
