//! Chat service orchestrating conversation lifecycle and delivery.
//!
//! Coordinates the repository, the provider registry, and the event bus:
//! load a chat snapshot, apply aggregate operations, save the result, and
//! publish the corresponding lifecycle event. Serializing concurrent
//! mutations of the same chat (row lock, per-chat mutex) is the
//! repository implementation's responsibility; each service call assumes
//! its load/save bracket appears atomic.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use omnichat_types::attachment::Attachment;
use omnichat_types::chat::Chat;
use omnichat_types::error::{ChatError, ProviderError, RepositoryError};
use omnichat_types::message::Message;

use crate::chat::dto::{CreateChatDto, ValidationError};
use crate::chat::provider::ProviderRegistry;
use crate::chat::repository::{ChatRepository, FindParams};
use crate::event::bus::EventBus;
use crate::event::{ActingUser, ChatEvent};

/// Errors surfaced by chat use cases.
#[derive(Debug, Error)]
pub enum ChatServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] ChatError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Use-case layer over the chat aggregate.
///
/// Generic over the repository so this crate never depends on a concrete
/// storage implementation.
pub struct ChatService<R: ChatRepository> {
    repo: R,
    providers: ProviderRegistry,
    events: EventBus,
}

impl<R: ChatRepository> ChatService<R> {
    pub fn new(repo: R, providers: ProviderRegistry, events: EventBus) -> Self {
        Self {
            repo,
            providers,
            events,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // --- Queries ---

    pub async fn count(&self) -> Result<i64, RepositoryError> {
        self.repo.count().await
    }

    pub async fn get_paginated(&self, params: &FindParams) -> Result<Vec<Chat>, RepositoryError> {
        self.repo.get_paginated(params).await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Chat, RepositoryError> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_by_client_id(&self, client_id: u32) -> Result<Chat, RepositoryError> {
        self.repo.get_by_client_id(client_id).await
    }

    // --- Mutations ---

    /// Create a conversation for a client.
    pub async fn create(
        &self,
        dto: &CreateChatDto,
        user: &ActingUser,
    ) -> Result<Chat, ChatServiceError> {
        dto.validate()?;
        let saved = self.repo.save(&dto.to_entity()).await?;
        info!(chat_id = saved.id(), client_id = saved.client_id(), "chat created");
        self.events.publish(ChatEvent::Created {
            user: user.clone(),
            data: dto.clone(),
            result: saved.clone(),
        });
        Ok(saved)
    }

    /// Record an inbound message against a chat, auto-enrolling its sender
    /// as a member.
    pub async fn register_message(
        &self,
        chat_id: u32,
        message: Message,
        user: &ActingUser,
    ) -> Result<Chat, ChatServiceError> {
        let chat = self.repo.get_by_id(chat_id).await?;
        let saved = self.repo.save(&chat.add_message(message)).await?;
        info!(
            chat_id = saved.id(),
            unread = saved.unread_messages(),
            "message registered"
        );
        self.events.publish(ChatEvent::Updated {
            user: user.clone(),
            result: saved.clone(),
        });
        Ok(saved)
    }

    /// Compose an outbound message from an existing member, deliver it
    /// over that member's channel, and persist the updated conversation.
    pub async fn send_message(
        &self,
        chat_id: u32,
        text: &str,
        sender_id: Uuid,
        attachments: Vec<Attachment>,
        user: &ActingUser,
    ) -> Result<Message, ChatServiceError> {
        let chat = self.repo.get_by_id(chat_id).await?;
        let (next, message) = chat.send_message(text, sender_id, attachments)?;

        let transport = message.sender().transport();
        let provider = self
            .providers
            .get(transport)
            .ok_or(ProviderError::UnsupportedTransport(transport))?;
        provider.send(&message).await?;

        let saved = self.repo.save(&next).await?;
        info!(chat_id = saved.id(), transport = %transport, "message sent");
        self.events.publish(ChatEvent::Updated {
            user: user.clone(),
            result: saved,
        });
        Ok(message)
    }

    /// Mark every message in a chat as read.
    pub async fn mark_all_as_read(
        &self,
        chat_id: u32,
        user: &ActingUser,
    ) -> Result<Chat, ChatServiceError> {
        let mut chat = self.repo.get_by_id(chat_id).await?;
        if chat.unread_messages() == 0 {
            return Ok(chat);
        }
        chat.mark_all_as_read();
        let saved = self.repo.save(&chat).await?;
        self.events.publish(ChatEvent::Updated {
            user: user.clone(),
            result: saved.clone(),
        });
        Ok(saved)
    }

    /// Administratively delete a chat.
    pub async fn delete(&self, id: u32, user: &ActingUser) -> Result<Chat, ChatServiceError> {
        let chat = self.repo.get_by_id(id).await?;
        self.repo.delete(id).await?;
        warn!(chat_id = id, client_id = chat.client_id(), "chat deleted");
        self.events.publish(ChatEvent::Deleted {
            user: user.clone(),
            result: chat.clone(),
        });
        Ok(chat)
    }
}
