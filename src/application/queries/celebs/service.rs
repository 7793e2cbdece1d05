use std::sync::Arc;

use crate::domain::{
    content::{ContentRecordReadRepository, ExcerptPolicy, PermalinkBuilder},
    content_type::ContentTypeSlug,
};

pub struct CelebQueryService {
    pub(super) read_repo: Arc<dyn ContentRecordReadRepository>,
    pub(super) content_type: ContentTypeSlug,
    pub(super) permalinks: PermalinkBuilder,
    pub(super) excerpts: ExcerptPolicy,
}

impl CelebQueryService {
    pub fn new(
        read_repo: Arc<dyn ContentRecordReadRepository>,
        content_type: ContentTypeSlug,
        permalinks: PermalinkBuilder,
        excerpts: ExcerptPolicy,
    ) -> Self {
        Self {
            read_repo,
            content_type,
            permalinks,
            excerpts,
        }
    }

    pub fn content_type(&self) -> &ContentTypeSlug {
        &self.content_type
    }
}
