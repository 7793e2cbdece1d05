// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};

use rt_celebs::domain::content::*;
use rt_celebs::domain::content_type::ContentTypeSlug;

pub struct RecordBuilder {
    id: i64,
    content_type: String,
    slug: String,
    title: String,
    body: String,
    excerpt: Option<String>,
    status: PublishStatus,
    published_at: DateTime<Utc>,
}

impl RecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            content_type: "rt-celebs".into(),
            slug: format!("celeb-{id}"),
            title: format!("Celeb {id}"),
            body: format!("<p>Biography of celeb number {id}.</p>"),
            excerpt: None,
            status: PublishStatus::Publish,
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::hours(id),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn status(mut self, status: PublishStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }

    pub fn build(self) -> ContentRecord {
        ContentRecord {
            id: RecordId::new(self.id).unwrap(),
            content_type: ContentTypeSlug::new(self.content_type).unwrap(),
            slug: RecordSlug::new(self.slug).unwrap(),
            title: self.title,
            body: self.body,
            excerpt: self.excerpt,
            status: self.status,
            published_at: self.published_at,
        }
    }
}

/// `count` published celebs with ids `1..=count`; higher ids are newer.
pub fn published_celebs(count: i64) -> Vec<ContentRecord> {
    (1..=count).map(|id| RecordBuilder::new(id).build()).collect()
}
