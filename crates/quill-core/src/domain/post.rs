use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - represents a blog post owned by a single author.
///
/// Every field falls back to its default when absent from a JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, not yet persisted post. Storage assigns the id.
    pub fn new(author_id: i64, title: String, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            author_id,
            title,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}
