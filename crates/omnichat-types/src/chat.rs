//! The Chat aggregate: one conversation per client across channels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::collections::HashMap;

use crate::attachment::Attachment;
use crate::error::ChatError;
use crate::member::Member;
use crate::message::Message;
use crate::sender::BaseSender;

/// Aggregate root for one client conversation.
///
/// Messages are kept in append order, which is the chronological order of
/// the conversation. Members are keyed by their membership UUID; every
/// message's sender is always a current member (enforced by
/// [`Chat::add_message`] auto-enrollment).
///
/// History-mutating operations (`add_message`, `add_member`,
/// `remove_member`) are copy-on-write: they take `&self` and return a new
/// `Chat`, so callers such as event handlers always hold a consistent
/// before/after pair. Read-state operations (`mark_all_as_read`) mutate in
/// place through `&mut self`; read state is ephemeral UI state, not
/// conversation history, and Rust's ownership rules already rule out the
/// aliasing hazards that motivated copy-on-write in the first place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    id: u32,
    client_id: u32,
    messages: Vec<Message>,
    members: HashMap<Uuid, Member>,
    created_at: DateTime<Utc>,
}

impl Chat {
    /// Create an empty, unsaved chat (`id == 0`) for a client.
    pub fn new(client_id: u32) -> Self {
        Self {
            id: 0,
            client_id,
            messages: Vec::new(),
            members: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    // Reconstruction overrides, used when loading from storage.

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members.into_iter().map(|m| (m.id(), m)).collect();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn client_id(&self) -> u32 {
        self.client_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Messages in append (chronological) order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The member set, in no particular order.
    pub fn members(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    pub fn member(&self, id: Uuid) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn has_member(&self, id: Uuid) -> bool {
        self.members.contains_key(&id)
    }

    /// Append a message, auto-enrolling its sender as a member if the
    /// member ID is not yet known to this chat.
    pub fn add_message(&self, message: Message) -> Chat {
        let mut next = self.clone();
        next.members
            .entry(message.sender().id())
            .or_insert_with(|| message.sender().clone());
        next.messages.push(message);
        next
    }

    /// Add a member. Returns the new chat plus whether anything changed;
    /// adding an already-present member ID is an idempotent no-op
    /// (`false`), which keeps event replay cheap while still telling the
    /// caller the operation was dropped.
    pub fn add_member(&self, member: Member) -> (Chat, bool) {
        if self.members.contains_key(&member.id()) {
            return (self.clone(), false);
        }
        let mut next = self.clone();
        next.members.insert(member.id(), member);
        (next, true)
    }

    /// Remove a member by ID. Unknown IDs are an idempotent no-op (`false`).
    pub fn remove_member(&self, member_id: Uuid) -> (Chat, bool) {
        if !self.members.contains_key(&member_id) {
            return (self.clone(), false);
        }
        let mut next = self.clone();
        next.members.remove(&member_id);
        (next, true)
    }

    /// Compose and append an outbound message from an existing member.
    ///
    /// Unlike [`Chat::add_message`], the sender here is referenced by
    /// member ID and must already belong to the chat. The message is
    /// stamped with this chat's ID and the current send time.
    pub fn send_message(
        &self,
        text: impl Into<String>,
        sender_id: Uuid,
        attachments: Vec<Attachment>,
    ) -> Result<(Chat, Message), ChatError> {
        let sender = self
            .members
            .get(&sender_id)
            .cloned()
            .ok_or(ChatError::SenderNotMember(sender_id))?;
        let message = Message::new(text, sender, attachments)?
            .with_chat_id(self.id)
            .with_sent_at(Utc::now());
        Ok((self.add_message(message.clone()), message))
    }

    /// Find the membership ID of an internal user.
    pub fn user_member_id(&self, user_id: u32) -> Result<Uuid, ChatError> {
        self.members
            .values()
            .find(|m| matches!(m.sender().base(), BaseSender::User(u) if u.user_id == user_id))
            .map(Member::id)
            .ok_or(ChatError::MemberNotFound)
    }

    /// Find the membership ID of a CRM client.
    pub fn client_member_id(&self, client_id: u32) -> Result<Uuid, ChatError> {
        self.members
            .values()
            .find(|m| matches!(m.sender().base(), BaseSender::Client(c) if c.client_id == client_id))
            .map(Member::id)
            .ok_or(ChatError::MemberNotFound)
    }

    /// Count of messages not yet read.
    pub fn unread_messages(&self) -> usize {
        self.messages.iter().filter(|m| !m.is_read()).count()
    }

    /// Mark every message read, in place.
    pub fn mark_all_as_read(&mut self) {
        for message in &mut self.messages {
            message.mark_as_read();
        }
    }

    /// The most recently appended message.
    pub fn last_message(&self) -> Result<&Message, ChatError> {
        self.messages.last().ok_or(ChatError::NoMessages)
    }

    /// Send time of the last message, `None` when the chat is empty or the
    /// last message has not been delivered yet.
    pub fn last_message_at(&self) -> Option<DateTime<Utc>> {
        self.messages.last().and_then(Message::sent_at)
    }
}
