use crate::domain::content::value_objects::RecordSlug;
use crate::domain::errors::{DomainError, DomainResult};
use url::Url;

/// Builds absolute record URLs of the form `{site}/{prefix}/{slug}/`.
#[derive(Debug, Clone)]
pub struct PermalinkBuilder {
    site: Url,
    prefix: String,
}

impl PermalinkBuilder {
    pub fn new(site: Url, prefix: impl Into<String>) -> DomainResult<Self> {
        if site.cannot_be_a_base() {
            return Err(DomainError::Validation(format!(
                "site url cannot carry a path: {site}"
            )));
        }
        let prefix = prefix.into().trim_matches('/').to_string();
        Ok(Self { site, prefix })
    }

    pub fn permalink(&self, slug: &RecordSlug) -> String {
        let mut url = self.site.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            for part in self.prefix.split('/').filter(|part| !part.is_empty()) {
                segments.push(part);
            }
            segments.push(slug.as_str()).push("");
        }
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(value: &str) -> RecordSlug {
        RecordSlug::new(value).unwrap()
    }

    #[test]
    fn builds_pretty_permalink() {
        let builder =
            PermalinkBuilder::new(Url::parse("https://example.com").unwrap(), "rt-celebs").unwrap();
        assert_eq!(
            builder.permalink(&slug("jane-doe")),
            "https://example.com/rt-celebs/jane-doe/"
        );
    }

    #[test]
    fn keeps_site_subdirectory() {
        let builder =
            PermalinkBuilder::new(Url::parse("https://example.com/blog/").unwrap(), "/celebs/")
                .unwrap();
        assert_eq!(
            builder.permalink(&slug("jane")),
            "https://example.com/blog/celebs/jane/"
        );
    }

    #[test]
    fn percent_encodes_slug() {
        let builder =
            PermalinkBuilder::new(Url::parse("http://localhost:8080").unwrap(), "rt-celebs")
                .unwrap();
        assert_eq!(
            builder.permalink(&slug("zoë saldaña")),
            "http://localhost:8080/rt-celebs/zo%C3%AB%20salda%C3%B1a/"
        );
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(PermalinkBuilder::new(Url::parse("mailto:a@b.c").unwrap(), "x").is_err());
    }
}
