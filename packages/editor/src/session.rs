//! # Edit Session
//!
//! One organizer editing one page. The session owns the in-memory
//! document and is its sole writer; the draft cache and document store
//! are downstream mirrors. They are the source of truth only once, at
//! session start.
//!
//! Every applied mutation:
//! 1. computes the next document value,
//! 2. mirrors it to the draft cache (fire-and-forget),
//! 3. notifies change listeners (editor canvas, autosave indicator).
//!
//! Saving to the remote store is explicit and user-triggered; it is the
//! only operation here with a visible failure mode, and a failed save
//! leaves the draft mirror intact so nothing is lost.

use crate::errors::EditorError;
use crate::mutations::Mutation;
use crate::store::{DocumentStore, DraftCache};
use pagestudio_document::{from_json, to_json, DesignDocument};
use tracing::{debug, warn};

pub type ChangeListener = Box<dyn FnMut(&DesignDocument)>;

pub struct EditSession {
    page_id: String,
    document: DesignDocument,
    version: u64,
    dirty: bool,
    draft: Box<dyn DraftCache>,
    listeners: Vec<ChangeListener>,
}

impl EditSession {
    /// Start a session over an already-loaded document. Malformed
    /// documents self-heal here, before the first edit.
    pub fn new(
        page_id: impl Into<String>,
        document: DesignDocument,
        draft: Box<dyn DraftCache>,
    ) -> Self {
        Self {
            page_id: page_id.into(),
            document: document.normalized(),
            version: 0,
            dirty: false,
            draft,
            listeners: Vec::new(),
        }
    }

    /// Start a session from the document store, falling back to a fresh
    /// document when the page has never been saved.
    pub fn open(
        page_id: impl Into<String>,
        store: &dyn DocumentStore,
        draft: Box<dyn DraftCache>,
    ) -> Result<Self, EditorError> {
        let page_id = page_id.into();
        let document = match store.load(&page_id)? {
            Some(serialized) => from_json(&serialized)?,
            None => DesignDocument::new(),
        };
        Ok(Self::new(page_id, document, draft))
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn document(&self) -> &DesignDocument {
        &self.document
    }

    /// Increments once per document-changing mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether there are changes not yet saved to the remote store.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn on_change(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Apply a mutation. No-op mutations (duplicate add, out-of-range
    /// move) leave the version, draft, and listeners untouched.
    pub fn apply(&mut self, mutation: Mutation) -> &DesignDocument {
        let next = mutation.apply(&self.document);
        if next == self.document {
            debug!(page = %self.page_id, ?mutation, "mutation was a no-op");
            return &self.document;
        }

        self.document = next;
        self.version += 1;
        self.dirty = true;
        debug!(page = %self.page_id, version = self.version, ?mutation, "applied mutation");

        self.mirror_draft();
        for listener in &mut self.listeners {
            listener(&self.document);
        }

        &self.document
    }

    /// Explicit save to the remote store. Failures are retryable: the
    /// in-memory document and the draft mirror both survive.
    pub fn save(&mut self, store: &mut dyn DocumentStore) -> Result<(), EditorError> {
        let serialized = to_json(&self.document)?;
        store.save(&self.page_id, &serialized)?;
        self.dirty = false;
        Ok(())
    }

    fn mirror_draft(&mut self) {
        match to_json(&self.document) {
            Ok(serialized) => self.draft.mirror(&self.page_id, &serialized),
            // Never surfaces: the draft is a best-effort safety net.
            Err(e) => warn!(page = %self.page_id, error = %e, "draft mirror skipped"),
        }
    }
}
