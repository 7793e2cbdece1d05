// tests/support/mocks/content_records.rs
use async_trait::async_trait;
use rt_celebs::domain::content::{ContentRecord, ContentRecordReadRepository, RecordPage};
use rt_celebs::domain::content_type::ContentTypeSlug;
use rt_celebs::domain::errors::{DomainError, DomainResult};
use rt_celebs::domain::pagination::PageRequest;
use std::cmp::Reverse;

/// Content store double that applies the same filter and ordering as the
/// SQLite adapter.
#[derive(Default)]
pub struct InMemoryRecordRepo {
    records: Vec<ContentRecord>,
}

impl InMemoryRecordRepo {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ContentRecordReadRepository for InMemoryRecordRepo {
    async fn list_published(
        &self,
        content_type: &ContentTypeSlug,
        page: PageRequest,
    ) -> DomainResult<RecordPage> {
        let mut matching: Vec<ContentRecord> = self
            .records
            .iter()
            .filter(|r| &r.content_type == content_type && r.is_published())
            .cloned()
            .collect();
        matching.sort_by_key(|r| Reverse((r.published_at, r.id)));

        let total = u64::try_from(matching.len()).unwrap();
        let records = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok(RecordPage { records, total })
    }
}

/// Content store double that is always unreachable.
pub struct FailingRecordRepo;

#[async_trait]
impl ContentRecordReadRepository for FailingRecordRepo {
    async fn list_published(
        &self,
        _content_type: &ContentTypeSlug,
        _page: PageRequest,
    ) -> DomainResult<RecordPage> {
        Err(DomainError::Persistence("unable to open database file".into()))
    }
}
