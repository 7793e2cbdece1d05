use super::CelebQueryService;
use crate::{
    application::{
        dto::{CelebSummaryDto, OffsetPage},
        error::ApplicationResult,
    },
    domain::{content::ContentRecord, pagination::PageRequest},
};

/// Raw pagination values as they arrived on the query string.
#[derive(Debug, Clone, Default)]
pub struct ListCelebsQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl CelebQueryService {
    pub async fn list_celebs(
        &self,
        query: ListCelebsQuery,
    ) -> ApplicationResult<OffsetPage<CelebSummaryDto>> {
        let request = PageRequest::from_raw(query.page.as_deref(), query.per_page.as_deref());

        let page = self
            .read_repo
            .list_published(&self.content_type, request)
            .await?;

        tracing::debug!(
            content_type = %self.content_type,
            page = request.page(),
            per_page = request.per_page(),
            total = page.total,
            returned = page.records.len(),
            "listed published records"
        );

        let items = page
            .records
            .iter()
            .map(|record| self.summarize(record))
            .collect();

        Ok(OffsetPage::new(items, page.total, request))
    }

    fn summarize(&self, record: &ContentRecord) -> CelebSummaryDto {
        CelebSummaryDto {
            id: record.id.into(),
            title: record.title.clone(),
            excerpt: self.excerpts.excerpt_for(record),
            date: record.published_at,
            link: self.permalinks.permalink(&record.slug),
        }
    }
}
