// src/application/services/mod.rs
use std::sync::Arc;

use url::Url;

use crate::{
    application::{
        ApplicationResult,
        commands::content_types::{
            ContentTypeCommandService, ContentTypeRegistration, RegisterContentTypeCommand,
            celebrity_profile_type,
        },
        queries::celebs::CelebQueryService,
    },
    domain::{
        content::{ContentRecordReadRepository, ExcerptPolicy, PermalinkBuilder},
        content_type::{ContentTypeDefinition, ContentTypeRegistry},
    },
};

pub struct ApplicationServices {
    pub celeb_queries: Arc<CelebQueryService>,
    content_type: ContentTypeDefinition,
}

impl ApplicationServices {
    /// Wire the query side against an already registered content type.
    pub fn new(
        record_repo: Arc<dyn ContentRecordReadRepository>,
        content_type: ContentTypeDefinition,
        site_url: Url,
    ) -> ApplicationResult<Self> {
        let permalinks = PermalinkBuilder::new(site_url, content_type.rewrite_slug.clone())?;
        let celeb_queries = Arc::new(CelebQueryService::new(
            record_repo,
            content_type.slug.clone(),
            permalinks,
            ExcerptPolicy::default(),
        ));

        Ok(Self {
            celeb_queries,
            content_type,
        })
    }

    /// Register the celebrity profile type, then build the services around
    /// whichever definition ends up in effect. Nothing is served until this
    /// returns.
    pub async fn bootstrap(
        registry: Arc<dyn ContentTypeRegistry>,
        record_repo: Arc<dyn ContentRecordReadRepository>,
        site_url: Url,
    ) -> ApplicationResult<Self> {
        let registrar = ContentTypeCommandService::new(registry);
        let ContentTypeRegistration { definition, .. } = registrar
            .ensure_registered(RegisterContentTypeCommand {
                definition: celebrity_profile_type()?,
            })
            .await?;

        Self::new(record_repo, definition, site_url)
    }

    pub fn content_type(&self) -> &ContentTypeDefinition {
        &self.content_type
    }
}
