use crate::domain::content::entity::ContentRecord;
use crate::domain::content_type::ContentTypeSlug;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

/// One window of records plus the number of records matching the query.
#[derive(Debug, Clone)]
pub struct RecordPage {
    pub records: Vec<ContentRecord>,
    pub total: u64,
}

#[async_trait]
pub trait ContentRecordReadRepository: Send + Sync {
    /// Published records of `content_type`, newest publish date first (ties by
    /// id, descending), restricted to the `page` window.
    async fn list_published(
        &self,
        content_type: &ContentTypeSlug,
        page: PageRequest,
    ) -> DomainResult<RecordPage>;
}
