use super::map_sqlx;
use crate::domain::content::{
    ContentRecord, ContentRecordReadRepository, PublishStatus, RecordId, RecordPage, RecordSlug,
};
use crate::domain::content_type::ContentTypeSlug;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteContentRecordRepository {
    pool: SqlitePool,
}

impl SqliteContentRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    content_type: String,
    slug: String,
    title: String,
    body: String,
    excerpt: Option<String>,
    status: String,
    published_at: DateTime<Utc>,
}

impl TryFrom<RecordRow> for ContentRecord {
    type Error = DomainError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        Ok(ContentRecord {
            id: RecordId::new(row.id)?,
            content_type: ContentTypeSlug::new(row.content_type)?,
            slug: RecordSlug::new(row.slug)?,
            title: row.title,
            body: row.body,
            excerpt: row.excerpt,
            status: PublishStatus::parse(&row.status)?,
            published_at: row.published_at,
        })
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ContentRecordReadRepository for SqliteContentRecordRepository {
    async fn list_published(
        &self,
        content_type: &ContentTypeSlug,
        page: PageRequest,
    ) -> DomainResult<RecordPage> {
        let status = PublishStatus::Publish.as_str();

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM content_records WHERE content_type = ? AND status = ?",
        )
        .bind(content_type.as_str())
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        let total = u64::try_from(total).unwrap_or_default();

        if page.offset() >= total {
            return Ok(RecordPage {
                records: Vec::new(),
                total,
            });
        }

        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, content_type, slug, title, body, excerpt, status, published_at
             FROM content_records
             WHERE content_type = ? AND status = ?
             ORDER BY julianday(published_at) DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(content_type.as_str())
        .bind(status)
        .bind(to_sql_int(page.limit()))
        .bind(to_sql_int(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let records = rows
            .into_iter()
            .map(ContentRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RecordPage { records, total })
    }
}
