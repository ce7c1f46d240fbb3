//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical persisted record: title, content, tags,
//!   creation timestamp.
//!
//! # Invariants
//! - `created_at` is stamped once at construction and never mutated.
//! - `tags` are lowercase and deduplicated within one note.
//! - Notes carry no identity field; titles are not unique.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted note record.
///
/// The serialized shape is exactly these four fields; `created_at` is
/// written as an RFC 3339 timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// User-supplied label. May be empty; uniqueness is not enforced.
    pub title: String,
    /// Free text body.
    pub content: String,
    /// Lowercase keywords derived from `content` at creation time.
    pub tags: Vec<String>,
    /// Creation instant, used only for sort ordering.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note stamped with the current time.
    ///
    /// Callers are expected to pass tags already normalized to
    /// lowercase; see [`crate::store::normalize_tags`].
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags,
            created_at: Utc::now(),
        }
    }
}
