use crate::domain::content_type::entity::ContentTypeDefinition;
use crate::domain::content_type::value_objects::ContentTypeSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContentTypeRegistry: Send + Sync {
    async fn find(&self, slug: &ContentTypeSlug) -> DomainResult<Option<ContentTypeDefinition>>;

    /// Insert the definition unless one with the same slug exists. Returns
    /// `true` when this call created it. Existing definitions are left as is.
    async fn register_if_absent(&self, definition: &ContentTypeDefinition) -> DomainResult<bool>;
}
