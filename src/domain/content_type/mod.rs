pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContentTypeDefinition, ContentTypeLabels};
pub use repository::ContentTypeRegistry;
pub use value_objects::{ContentTypeSlug, SupportedFeature};
