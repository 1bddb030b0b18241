//! Persistence adapter interfaces.
//!
//! Both adapters exchange the document's serialized JSON form; the actual
//! storage (browser local storage, a hosted document API) lives outside
//! this crate. The in-memory implementations back tests and ephemeral
//! sessions.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store could not complete the request. Saves are idempotent
    /// full-document replacements, so callers may simply retry.
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("No document stored for page '{0}'")]
    NotFound(String),
}

/// Local ephemeral draft mirror.
///
/// Mirroring is fire-and-forget: implementations must not block and must
/// swallow failures (logging them at most). The draft exists so a crashed
/// session or a failed remote save loses nothing.
pub trait DraftCache {
    fn mirror(&mut self, page_id: &str, serialized: &str);

    fn restore(&self, page_id: &str) -> Option<String>;
}

/// Durable remote document store.
///
/// Saves replace the whole document; a later save supersedes an earlier
/// in-flight one by value. Timeout and retry policy belong to the
/// adapter, not the core.
pub trait DocumentStore {
    fn load(&self, page_id: &str) -> Result<Option<String>, StoreError>;

    fn save(&mut self, page_id: &str, serialized: &str) -> Result<(), StoreError>;
}

/// In-memory draft cache
#[derive(Debug, Default)]
pub struct MemoryDraftCache {
    drafts: HashMap<String, String>,
}

impl MemoryDraftCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftCache for MemoryDraftCache {
    fn mirror(&mut self, page_id: &str, serialized: &str) {
        self.drafts
            .insert(page_id.to_string(), serialized.to_string());
    }

    fn restore(&self, page_id: &str) -> Option<String> {
        self.drafts.get(page_id).cloned()
    }
}

/// In-memory document store; `fail_saves` simulates an unavailable
/// backend for retry-path tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: HashMap<String, String>,
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(page_id: &str, serialized: &str) -> Self {
        let mut store = Self::new();
        store
            .documents
            .insert(page_id.to_string(), serialized.to_string());
        store
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, page_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.documents.get(page_id).cloned())
    }

    fn save(&mut self, page_id: &str, serialized: &str) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        self.documents
            .insert(page_id.to_string(), serialized.to_string());
        Ok(())
    }
}
