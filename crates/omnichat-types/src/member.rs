//! Chat membership: a stable participant identity wrapping a sender.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sender::{Sender, Transport};

/// A conversation participant.
///
/// Identity is the UUID, assigned once at creation and stable for the
/// conversation's lifetime no matter how the wrapped sender details
/// evolve. Two members with equal sender content but different IDs are
/// distinct participants; merging them is a higher-layer concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    id: Uuid,
    transport: Transport,
    sender: Sender,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a member with a fresh random ID. The transport is derived
    /// from the sender.
    pub fn new(sender: Sender) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            transport: sender.transport(),
            sender,
            created_at: now,
            updated_at: now,
        }
    }

    /// Override the ID when reconstructing from storage.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::{BaseSender, ClientSender, UserSender};

    #[test]
    fn test_member_derives_transport_from_sender() {
        let base = ClientSender::new(Transport::Instagram, 1, 1, "Jane", "Doe");
        let member = Member::new(Sender::instagram(base, "janedoe"));
        assert_eq!(member.transport(), Transport::Instagram);
    }

    #[test]
    fn test_members_with_same_sender_are_distinct() {
        let sender = Sender::from(BaseSender::User(UserSender::new(
            Transport::Other,
            1,
            "A",
            "B",
        )));
        let first = Member::new(sender.clone());
        let second = Member::new(sender);
        assert_ne!(first.id(), second.id());
        assert_eq!(first.sender(), second.sender());
    }

    #[test]
    fn test_reconstruction_overrides() {
        let id = Uuid::new_v4();
        let stamp = Utc::now() - chrono::Duration::days(3);
        let member = Member::new(Sender::other(None))
            .with_id(id)
            .with_created_at(stamp)
            .with_updated_at(stamp);
        assert_eq!(member.id(), id);
        assert_eq!(member.created_at(), stamp);
        assert_eq!(member.updated_at(), stamp);
    }
}
