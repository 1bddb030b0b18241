//! # Document Mutations
//!
//! Serializable, intent-preserving operations on a design document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is one semantic user action
//! 2. **Total application**: `apply` never fails; actions that cannot
//!    apply leave the document unchanged
//! 3. **Advisory validation**: `validate` reports *why* an action would
//!    not apply, for UI affordances (disabled buttons, upsell hints)
//! 4. **Replayable**: mutations serialize, so a session can log and
//!    mirror them
//!
//! ## Mutation Semantics
//!
//! ### AddBlock
//! - One instance per kind; adding an existing kind is a no-op
//! - New instances land at the end of the page, visible, no settings
//!
//! ### MoveBlock / Reorder
//! - Remove-then-insert, never swap
//! - A drop where source equals target is a no-op
//!
//! ### SetSettings
//! - Whole-bag replacement (shallow), no shape validation

use crate::engine;
use pagestudio_catalog::{Catalog, CatalogError};
use pagestudio_document::DesignDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Place a new block kind at the end of the page
    AddBlock { kind_id: String },

    /// Remove a placed block; remaining positions compact
    RemoveBlock { id: String },

    /// Bulk position reassignment to the requested order
    Reorder { ordered_ids: Vec<String> },

    /// Drag one block from render index `from` to render index `to`
    MoveBlock { from: usize, to: usize },

    /// Flip a block's visibility; hidden blocks stay in the document
    ToggleVisibility { id: String },

    /// Replace a block's settings bag (shallow, whole-bag)
    SetSettings { id: String, settings: Option<Value> },

    /// Remove every block (the UI owns the confirmation)
    ClearAll,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Block '{0}' is already on the page")]
    DuplicateBlock(String),

    #[error("Block '{0}' is not on the page")]
    BlockNotFound(String),

    #[error("Index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Mutation {
    /// Apply to a document, producing a new one. Total: anything that
    /// cannot apply returns the document unchanged.
    pub fn apply(&self, doc: &DesignDocument) -> DesignDocument {
        match self {
            Mutation::AddBlock { kind_id } => engine::add_block(doc, kind_id),
            Mutation::RemoveBlock { id } => engine::remove_block(doc, id),
            Mutation::Reorder { ordered_ids } => engine::reorder(doc, ordered_ids),
            Mutation::MoveBlock { from, to } => engine::move_to(doc, *from, *to),
            Mutation::ToggleVisibility { id } => engine::toggle_visibility(doc, id),
            Mutation::SetSettings { id, settings } => {
                engine::set_settings(doc, id, settings.clone())
            }
            Mutation::ClearAll => engine::clear_all(doc),
        }
    }

    /// Explain whether the mutation would change the document. Apply does
    /// not call this; it exists for the UI layer.
    pub fn validate(&self, doc: &DesignDocument, catalog: &Catalog) -> Result<(), MutationError> {
        match self {
            Mutation::AddBlock { kind_id } => {
                catalog.require(kind_id)?;
                if doc.contains_kind(kind_id) {
                    return Err(MutationError::DuplicateBlock(kind_id.clone()));
                }
                Ok(())
            }

            Mutation::RemoveBlock { id }
            | Mutation::ToggleVisibility { id }
            | Mutation::SetSettings { id, .. } => {
                if doc.contains_kind(id) {
                    Ok(())
                } else {
                    Err(MutationError::BlockNotFound(id.clone()))
                }
            }

            Mutation::Reorder { ordered_ids } => {
                for id in ordered_ids {
                    if !doc.contains_kind(id) {
                        return Err(MutationError::BlockNotFound(id.clone()));
                    }
                }
                Ok(())
            }

            Mutation::MoveBlock { from, to } => {
                let len = doc.blocks.len();
                for &index in &[*from, *to] {
                    if index >= len {
                        return Err(MutationError::IndexOutOfRange { index, len });
                    }
                }
                Ok(())
            }

            Mutation::ClearAll => Ok(()),
        }
    }
}
