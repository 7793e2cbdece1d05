use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Registry key of a content type, e.g. `rt-celebs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentTypeSlug(String);

impl ContentTypeSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "content type slug cannot be empty".into(),
            ));
        }
        if value.len() > 20 {
            return Err(DomainError::Validation(
                "content type slug must be at most 20 characters".into(),
            ));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(
                "content type slug may only contain lowercase letters, digits, '-' and '_'"
                    .into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentTypeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentTypeSlug> for String {
    fn from(value: ContentTypeSlug) -> Self {
        value.0
    }
}

/// Capabilities a content type enables in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedFeature {
    Title,
    Editor,
    Excerpt,
    Thumbnail,
}

impl SupportedFeature {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Editor => "editor",
            Self::Excerpt => "excerpt",
            Self::Thumbnail => "thumbnail",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "title" => Ok(Self::Title),
            "editor" => Ok(Self::Editor),
            "excerpt" => Ok(Self::Excerpt),
            "thumbnail" => Ok(Self::Thumbnail),
            other => Err(DomainError::Validation(format!(
                "unknown content type feature: {other}"
            ))),
        }
    }
}
