//! ChatRepository trait definition.
//!
//! The persistence contract for chat aggregates: CRUD, pagination, search,
//! and member-by-contact lookup. Implementations live outside this crate
//! (e.g., a SQL repository). Uses native async fn in traits (RPITIT,
//! Rust 2024 edition).

use serde::{Deserialize, Serialize};

use omnichat_types::chat::Chat;
use omnichat_types::contact::ContactType;
use omnichat_types::error::RepositoryError;
use omnichat_types::member::Member;

/// Columns a chat listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    LastMessageAt,
}

/// Sort specification for paginated listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy {
    pub fields: Vec<SortField>,
    pub ascending: bool,
}

impl Default for SortBy {
    /// Newest activity first.
    fn default() -> Self {
        Self {
            fields: vec![SortField::LastMessageAt],
            ascending: false,
        }
    }
}

/// Query parameters for paginated chat listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindParams {
    pub limit: i64,
    pub offset: i64,
    /// Free-text search over client names and message text.
    pub search: Option<String>,
    pub sort_by: SortBy,
}

impl Default for FindParams {
    fn default() -> Self {
        Self {
            limit: 25,
            offset: 0,
            search: None,
            sort_by: SortBy::default(),
        }
    }
}

/// Repository contract for chat persistence.
///
/// `save` is an upsert: a chat with `id == 0` is created and assigned a
/// persistent ID, anything else is updated. Lookups that miss return
/// [`RepositoryError::NotFound`], distinguishable from other storage
/// failures so callers can map it to a 404-equivalent.
pub trait ChatRepository: Send + Sync {
    /// Total number of chats.
    fn count(&self) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;

    /// Page through chats, filtered and ordered by `params`.
    fn get_paginated(
        &self,
        params: &FindParams,
    ) -> impl std::future::Future<Output = Result<Vec<Chat>, RepositoryError>> + Send;

    /// Get a chat by its persistent ID.
    fn get_by_id(
        &self,
        id: u32,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Get the single chat belonging to a client.
    fn get_by_client_id(
        &self,
        client_id: u32,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Find the chat member reachable at a contact value (phone number,
    /// email address, channel username). Used by inbound webhook routing.
    fn get_member_by_contact(
        &self,
        contact_type: ContactType,
        contact_value: &str,
    ) -> impl std::future::Future<Output = Result<Member, RepositoryError>> + Send;

    /// Upsert a chat and return the persisted aggregate (with IDs assigned).
    fn save(
        &self,
        chat: &Chat,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Administratively delete a chat by ID.
    fn delete(
        &self,
        id: u32,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_params_defaults() {
        let params = FindParams::default();
        assert_eq!(params.limit, 25);
        assert_eq!(params.offset, 0);
        assert!(params.search.is_none());
        assert_eq!(params.sort_by.fields, vec![SortField::LastMessageAt]);
        assert!(!params.sort_by.ascending);
    }

    #[test]
    fn test_sort_field_serde() {
        let json = serde_json::to_string(&SortField::LastMessageAt).unwrap();
        assert_eq!(json, "\"last_message_at\"");
    }
}
