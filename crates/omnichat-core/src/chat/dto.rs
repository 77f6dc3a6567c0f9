//! Boundary input for chat creation.
//!
//! DTOs are validated before they touch the domain constructors; the
//! domain layer itself never sees unvalidated external input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use omnichat_types::chat::Chat;

/// A single failed validation rule. Localization of the message is the
/// presentation layer's job.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Input for creating a conversation for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChatDto {
    pub client_id: u32,
}

impl CreateChatDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id == 0 {
            return Err(ValidationError {
                field: "client_id",
                message: "is required",
            });
        }
        Ok(())
    }

    pub fn to_entity(&self) -> Chat {
        Chat::new(self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_client_id_is_rejected() {
        let err = CreateChatDto { client_id: 0 }.validate().unwrap_err();
        assert_eq!(err.field, "client_id");
        assert_eq!(err.to_string(), "client_id: is required");
    }

    #[test]
    fn test_valid_dto_maps_to_empty_chat() {
        let dto = CreateChatDto { client_id: 7 };
        dto.validate().unwrap();
        let chat = dto.to_entity();
        assert_eq!(chat.client_id(), 7);
        assert_eq!(chat.id(), 0);
        assert!(chat.messages().is_empty());
    }
}
