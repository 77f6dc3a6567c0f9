//! Business logic and port definitions for the Omnichat conversation core.
//!
//! This crate defines the "ports" the infrastructure layer implements --
//! the `ChatRepository` persistence contract and the `MessageProvider`
//! outbound-channel contract -- plus the `ChatService` use-case layer and
//! the event bus presentation layers subscribe to. It depends only on
//! `omnichat-types`, never on any database or HTTP crate.

pub mod chat;
pub mod event;
