// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_content_record;
mod sqlite_content_type;

pub use error::map_sqlx;
pub use sqlite_content_record::SqliteContentRecordRepository;
pub use sqlite_content_type::SqliteContentTypeRegistry;
