//! One turn in a conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;
use crate::error::ChatError;
use crate::member::Member;

/// A message belonging to a chat, authored by a member.
///
/// `id == 0` means the message has not been persisted yet; the repository
/// assigns the real ID on save. `created_at` is when the record came into
/// existence, `sent_at` is when the channel actually accepted delivery --
/// the two differ for outbound messages that fail or lag on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: u32,
    chat_id: u32,
    text: String,
    sender: Member,
    is_read: bool,
    read_at: Option<DateTime<Utc>>,
    sent_at: Option<DateTime<Utc>>,
    attachments: Vec<Attachment>,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Create an unread, unsaved message.
    ///
    /// A message must carry text or at least one attachment; an empty
    /// message is rejected with [`ChatError::EmptyMessage`].
    pub fn new(
        text: impl Into<String>,
        sender: Member,
        attachments: Vec<Attachment>,
    ) -> Result<Self, ChatError> {
        let text = text.into();
        if text.is_empty() && attachments.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(Self {
            id: 0,
            chat_id: 0,
            text,
            sender,
            is_read: false,
            read_at: None,
            sent_at: None,
            attachments,
            created_at: Utc::now(),
        })
    }

    // Reconstruction overrides, used when loading from storage.

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_chat_id(mut self, chat_id: u32) -> Self {
        self.chat_id = chat_id;
        self
    }

    /// Restore persisted read state. Sets both the flag and the timestamp.
    pub fn with_read_at(mut self, read_at: DateTime<Utc>) -> Self {
        self.is_read = true;
        self.read_at = Some(read_at);
        self
    }

    pub fn with_sent_at(mut self, sent_at: DateTime<Utc>) -> Self {
        self.sent_at = Some(sent_at);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn chat_id(&self) -> u32 {
        self.chat_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> &Member {
        &self.sender
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.read_at
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the message read, stamping `read_at` with the current time.
    ///
    /// Idempotent: a second call leaves the original `read_at` untouched.
    /// Read state is ephemeral UI state, so it mutates in place rather
    /// than going through the aggregate's copy-on-write path.
    pub fn mark_as_read(&mut self) {
        if !self.is_read {
            self.is_read = true;
            self.read_at = Some(Utc::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::{ClientSender, Sender, Transport, UserSender};

    fn client_member() -> Member {
        Member::new(Sender::from(crate::sender::BaseSender::Client(
            ClientSender::new(Transport::Website, 7, 3, "Jane", "Doe"),
        )))
    }

    #[test]
    fn test_empty_message_rejected() {
        assert_eq!(
            Message::new("", client_member(), Vec::new()).unwrap_err(),
            ChatError::EmptyMessage
        );
    }

    #[test]
    fn test_attachment_only_message_accepted() {
        let att = Attachment::new(1, "photo.jpg", "image/jpeg", "/files/1", 512);
        let msg = Message::new("", client_member(), vec![att]).unwrap();
        assert_eq!(msg.attachments().len(), 1);
        assert_eq!(msg.text(), "");
    }

    #[test]
    fn test_new_message_defaults() {
        let msg = Message::new("Hello", client_member(), Vec::new()).unwrap();
        assert_eq!(msg.id(), 0);
        assert_eq!(msg.chat_id(), 0);
        assert!(!msg.is_read());
        assert!(msg.read_at().is_none());
        assert!(msg.sent_at().is_none());
        assert!(msg.attachments().is_empty());
    }

    #[test]
    fn test_mark_as_read_is_idempotent() {
        let mut msg = Message::new("Hello", client_member(), Vec::new()).unwrap();
        msg.mark_as_read();
        let first_read_at = msg.read_at();
        assert!(msg.is_read());
        assert!(first_read_at.is_some());

        msg.mark_as_read();
        assert_eq!(msg.read_at(), first_read_at);
    }

    #[test]
    fn test_reconstruction_restores_read_state() {
        let stamp = Utc::now() - chrono::Duration::hours(1);
        let msg = Message::new("Hi", client_member(), Vec::new())
            .unwrap()
            .with_id(12)
            .with_chat_id(4)
            .with_read_at(stamp)
            .with_sent_at(stamp);
        assert_eq!(msg.id(), 12);
        assert_eq!(msg.chat_id(), 4);
        assert!(msg.is_read());
        assert_eq!(msg.read_at(), Some(stamp));
        assert_eq!(msg.sent_at(), Some(stamp));
    }

    #[test]
    fn test_message_from_staff_user() {
        let staff = Member::new(Sender::from(crate::sender::BaseSender::User(
            UserSender::new(Transport::Other, 2, "Sam", "Agent"),
        )));
        let msg = Message::new("On it", staff, Vec::new()).unwrap();
        assert_eq!(
            msg.sender().sender().sender_type(),
            crate::sender::SenderType::User
        );
    }
}
