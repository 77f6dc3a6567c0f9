//! Opaque references to uploaded files attached to messages.
//!
//! The conversation core never touches attachment bytes; it only carries
//! the upload's identity and metadata so presentation layers can link to
//! the stored file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference to a stored upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u32,
    pub name: String,
    pub mime_type: String,
    pub url: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        url: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            mime_type: mime_type.into(),
            url: url.into(),
            size,
            created_at: Utc::now(),
        }
    }
}
