//! Message entity
//!
//! The only record kind the board stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::UpdateMessageRequest;

/// A message listed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-generated identifier, immutable
    pub id: String,
    pub title: String,
    pub body: String,
    /// Freeform attachment reference, not validated
    #[serde(
        rename = "attachmentURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// `None` until the first update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a message with a fresh UUID v4 id.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        attachment_url: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            body: body.into(),
            attachment_url,
            created_at: now,
            updated_at: None,
        }
    }

    /// Merges the mutable fields of `update` into this message.
    ///
    /// `id` and `created_at` are never touched. `updated_at` is set to `now`,
    /// clamped so it is never earlier than `created_at`.
    pub fn apply(&mut self, update: UpdateMessageRequest, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(body) = update.body {
            self.body = body;
        }
        if let Some(attachment_url) = update.attachment_url {
            self.attachment_url = attachment_url;
        }
        self.updated_at = Some(now.max(self.created_at));
    }
}
