use crate::domain::content_type::value_objects::{ContentTypeSlug, SupportedFeature};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeLabels {
    pub name: String,
    pub singular_name: String,
}

/// Schema entry for a category of content records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeDefinition {
    pub slug: ContentTypeSlug,
    pub labels: ContentTypeLabels,
    pub public: bool,
    pub has_archive: bool,
    pub show_in_rest: bool,
    pub supports: Vec<SupportedFeature>,
    pub rewrite_slug: String,
}

impl ContentTypeDefinition {
    /// A publicly visible, archived, API-exposed type whose URL prefix equals
    /// its slug.
    pub fn public_with_archive(
        slug: ContentTypeSlug,
        labels: ContentTypeLabels,
        supports: Vec<SupportedFeature>,
    ) -> Self {
        let rewrite_slug = slug.as_str().to_string();
        Self {
            slug,
            labels,
            public: true,
            has_archive: true,
            show_in_rest: true,
            supports,
            rewrite_slug,
        }
    }

    pub fn supports(&self, feature: SupportedFeature) -> bool {
        self.supports.contains(&feature)
    }
}
