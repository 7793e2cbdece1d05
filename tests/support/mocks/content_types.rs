// tests/support/mocks/content_types.rs
use async_trait::async_trait;
use rt_celebs::domain::content_type::{
    ContentTypeDefinition, ContentTypeRegistry, ContentTypeSlug,
};
use rt_celebs::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct InMemoryRegistry {
    types: Mutex<HashMap<String, ContentTypeDefinition>>,
    inserts: AtomicUsize,
}

impl InMemoryRegistry {
    pub fn with(definition: ContentTypeDefinition) -> Self {
        let registry = Self::default();
        registry
            .types
            .lock()
            .unwrap()
            .insert(definition.slug.as_str().to_string(), definition);
        registry
    }

    pub fn get(&self, slug: &str) -> Option<ContentTypeDefinition> {
        self.types.lock().unwrap().get(slug).cloned()
    }

    /// Number of definitions this registry has accepted through
    /// `register_if_absent`.
    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentTypeRegistry for InMemoryRegistry {
    async fn find(&self, slug: &ContentTypeSlug) -> DomainResult<Option<ContentTypeDefinition>> {
        Ok(self.get(slug.as_str()))
    }

    async fn register_if_absent(&self, definition: &ContentTypeDefinition) -> DomainResult<bool> {
        let mut types = self.types.lock().unwrap();
        if types.contains_key(definition.slug.as_str()) {
            return Ok(false);
        }
        types.insert(definition.slug.as_str().to_string(), definition.clone());
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Registry whose backing store is down.
pub struct FailingRegistry;

#[async_trait]
impl ContentTypeRegistry for FailingRegistry {
    async fn find(&self, _slug: &ContentTypeSlug) -> DomainResult<Option<ContentTypeDefinition>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn register_if_absent(&self, _definition: &ContentTypeDefinition) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// Simulates another process registering the type between our lookup and
/// our insert.
pub struct RacingRegistry {
    winner: ContentTypeDefinition,
    lookups: AtomicUsize,
}

impl RacingRegistry {
    pub fn new(winner: ContentTypeDefinition) -> Self {
        Self {
            winner,
            lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ContentTypeRegistry for RacingRegistry {
    async fn find(&self, _slug: &ContentTypeSlug) -> DomainResult<Option<ContentTypeDefinition>> {
        if self.lookups.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(None)
        } else {
            Ok(Some(self.winner.clone()))
        }
    }

    async fn register_if_absent(&self, _definition: &ContentTypeDefinition) -> DomainResult<bool> {
        Ok(false)
    }
}
