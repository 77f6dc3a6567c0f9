//! Conversation use cases and the persistence/delivery contracts they need.

pub mod dto;
pub mod provider;
pub mod repository;
pub mod service;
