use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Listing row for one celebrity profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CelebSummaryDto {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime, example = "2024-01-15T10:30:00+00:00")]
    pub date: DateTime<Utc>,
    pub link: String,
}
