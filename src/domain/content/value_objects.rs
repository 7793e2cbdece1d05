use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// URL path segment identifying a record under its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSlug(String);

impl RecordSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("record slug cannot be empty".into()));
        }
        if value.contains('/') {
            return Err(DomainError::Validation(
                "record slug cannot contain '/'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishStatus {
    Publish,
    Future,
    Draft,
    Pending,
    Private,
    Trash,
}

impl PublishStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Future => "future",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Trash => "trash",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "publish" => Ok(Self::Publish),
            "future" => Ok(Self::Future),
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "private" => Ok(Self::Private),
            "trash" => Ok(Self::Trash),
            other => Err(DomainError::Validation(format!(
                "unknown publish status: {other}"
            ))),
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
