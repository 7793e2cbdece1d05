// tests/support/mocks/mod.rs
pub mod content_records;
pub mod content_types;

pub use content_records::{FailingRecordRepo, InMemoryRecordRepo};
pub use content_types::{FailingRegistry, InMemoryRegistry, RacingRegistry};
