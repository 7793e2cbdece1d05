use std::sync::Arc;

use crate::domain::content_type::ContentTypeRegistry;

pub struct ContentTypeCommandService {
    pub(super) registry: Arc<dyn ContentTypeRegistry>,
}

impl ContentTypeCommandService {
    pub fn new(registry: Arc<dyn ContentTypeRegistry>) -> Self {
        Self { registry }
    }
}
