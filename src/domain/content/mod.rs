pub mod entity;
pub mod excerpt;
pub mod permalink;
pub mod repository;
pub mod value_objects;

pub use entity::ContentRecord;
pub use excerpt::ExcerptPolicy;
pub use permalink::PermalinkBuilder;
pub use repository::{ContentRecordReadRepository, RecordPage};
pub use value_objects::{PublishStatus, RecordId, RecordSlug};
