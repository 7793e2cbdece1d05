use crate::domain::{
    content_type::{ContentTypeDefinition, ContentTypeLabels, ContentTypeSlug, SupportedFeature},
    errors::DomainResult,
};

pub const CELEB_TYPE_SLUG: &str = "rt-celebs";

/// The celebrity profile type registered at startup when no other component
/// has registered it first.
pub fn celebrity_profile_type() -> DomainResult<ContentTypeDefinition> {
    Ok(ContentTypeDefinition::public_with_archive(
        ContentTypeSlug::new(CELEB_TYPE_SLUG)?,
        ContentTypeLabels {
            name: "RT Celebs".into(),
            singular_name: "RT Celeb".into(),
        },
        vec![
            SupportedFeature::Title,
            SupportedFeature::Editor,
            SupportedFeature::Excerpt,
            SupportedFeature::Thumbnail,
        ],
    ))
}
