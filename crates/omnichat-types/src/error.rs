use thiserror::Error;
use uuid::Uuid;

use crate::sender::Transport;

/// Domain-rule violations raised by the chat aggregate and message entity.
///
/// These arise from legitimate external input and are meant to be handled
/// by callers (render a validation message, skip a no-op). Invariant
/// violations that would indicate a bug at the call site are instead made
/// unrepresentable by the type system.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("chat has no messages")]
    NoMessages,

    #[error("sender '{0}' is not a member of this chat")]
    SenderNotMember(Uuid),

    #[error("member not found")]
    MemberNotFound,
}

/// Errors from repository operations (trait definitions live in omnichat-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors from outbound channel providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no provider registered for transport '{0}'")]
    UnsupportedTransport(Transport),

    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Errors from parsing contact value objects.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("phone number is empty")]
    EmptyPhone,

    #[error("invalid phone number: '{0}'")]
    InvalidPhone(String),

    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("invalid contact type: '{0}'")]
    InvalidContactType(String),
}
