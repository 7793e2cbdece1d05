pub mod content;
pub mod content_type;
pub mod errors;
pub mod pagination;
