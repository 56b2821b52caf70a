//! Process-lifetime document cache.
//!
//! Provides a trait for document caching and two implementations:
//! - [`MemoryCache`]: In-memory map keyed by content file path
//! - [`NullCache`]: No-op cache (caching disabled)
//!
//! Entries are never invalidated: content is static for the life of the
//! process. Two threads missing on the same key may both compile the document;
//! both produce the same value, so the second insert is harmless.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::document::Document;

/// Storage for compiled documents, keyed by content file path.
pub trait DocumentCache: Send + Sync {
    /// Cached document for `key`, if any.
    fn get(&self, key: &str) -> Option<Arc<Document>>;

    /// Store a document. Replaces any existing entry.
    fn insert(&self, key: &str, document: Arc<Document>);

    /// Number of cached documents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory document cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Arc<Document>>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Arc<Document>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).map(Arc::clone)
    }

    fn insert(&self, key: &str, document: Arc<Document>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), document);
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// No-op cache: every lookup misses, every insert is discarded.
#[derive(Debug, Default)]
pub struct NullCache;

impl DocumentCache for NullCache {
    fn get(&self, _key: &str) -> Option<Arc<Document>> {
        None
    }

    fn insert(&self, _key: &str, _document: Arc<Document>) {}

    fn len(&self) -> usize {
        0
    }
}
