//! Shared domain types for the Omnichat conversation core.
//!
//! This crate models one conversation per CRM client across heterogeneous
//! channels (Telegram, WhatsApp, Instagram, SMS, email, phone, website
//! widget, internal messages): the Chat aggregate, its messages and
//! members, and the channel-tagged sender identities behind them.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod attachment;
pub mod chat;
pub mod contact;
pub mod error;
pub mod member;
pub mod message;
pub mod sender;
