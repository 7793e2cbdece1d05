use crate::domain::content::value_objects::{PublishStatus, RecordId, RecordSlug};
use crate::domain::content_type::ContentTypeSlug;
use chrono::{DateTime, Utc};

/// A stored content item. Owned by the content store; read-only here.
#[derive(Debug, Clone)]
pub struct ContentRecord {
    pub id: RecordId,
    pub content_type: ContentTypeSlug,
    pub slug: RecordSlug,
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub status: PublishStatus,
    pub published_at: DateTime<Utc>,
}

impl ContentRecord {
    pub fn is_published(&self) -> bool {
        self.status == PublishStatus::Publish
    }

    /// The explicit excerpt, if one was set and is not blank.
    pub fn explicit_excerpt(&self) -> Option<&str> {
        self.excerpt
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}
