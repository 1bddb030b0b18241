//! # Pagestudio Editor
//!
//! The block-composition engine: every way an organizer can change a
//! page's design document, plus the session bookkeeping around it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: which block kinds exist            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession + mutations             │
//! │  - Pure operations: doc → new doc           │
//! │  - Drag interaction, committed on drop      │
//! │  - Draft mirror on every change             │
//! │  - Explicit save to the document store      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ resolver / renderer: document → page        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: every operation returns a new document
//! 2. **No-ops over errors**: routine user actions never fail; validation
//!    is a separate, advisory step for UI affordances
//! 3. **Single writer**: the session owns the document; stores are mirrors
//! 4. **Transient drag state**: never part of the persisted document
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagestudio_editor::{EditSession, MemoryDraftCache, Mutation};
//!
//! let mut session = EditSession::open("page-1", &store, Box::new(MemoryDraftCache::new()))?;
//! session.apply(Mutation::AddBlock { kind_id: "hero".to_string() });
//! session.apply(Mutation::MoveBlock { from: 0, to: 1 });
//! session.save(&mut store)?;
//! ```

pub mod drag;
pub mod engine;
mod errors;
pub mod mutations;
pub mod session;
pub mod store;

pub use drag::DragInteraction;
pub use engine::{
    add_block, clear_all, move_to, remove_block, reorder, set_settings, toggle_visibility,
};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError};
pub use session::EditSession;
pub use store::{DocumentStore, DraftCache, MemoryDraftCache, MemoryStore, StoreError};

// Re-export the types the engine operates on for convenience
pub use pagestudio_catalog::{BlockKind, Catalog, Tier};
pub use pagestudio_document::{BlockInstance, DesignDocument};
