//! Pure composition operations.
//!
//! Every function takes a document and returns a new one; the input is
//! never mutated. Routine user actions that cannot apply (adding a kind
//! that already exists, moving to the same slot, removing an id that is
//! not there) return the document unchanged instead of failing.
//!
//! Tier-gating is not an operation on the document: see
//! [`BlockKind::is_locked`](pagestudio_catalog::BlockKind::is_locked).
//! Locked blocks stay in the document and the render pipeline shows the
//! lock affordance; entitlement is re-checked on every render.

use pagestudio_document::{BlockInstance, DesignDocument};
use serde_json::Value;

/// Append a new instance of `kind_id` at the end of the page.
///
/// No-op if an instance of that kind already exists (one instance per
/// kind).
pub fn add_block(doc: &DesignDocument, kind_id: &str) -> DesignDocument {
    if doc.contains_kind(kind_id) {
        return doc.clone();
    }

    let mut next = doc.clone();
    let position = next.blocks.len() as u32;
    next.blocks.push(BlockInstance::new(kind_id, position));
    next
}

/// Remove the instance with `id`, renumbering the remaining positions so
/// they stay contiguous while preserving relative order.
pub fn remove_block(doc: &DesignDocument, id: &str) -> DesignDocument {
    if !doc.contains_kind(id) {
        return doc.clone();
    }

    let blocks = doc
        .ordered_blocks()
        .into_iter()
        .filter(|b| b.id != id)
        .cloned()
        .collect();

    with_blocks(doc, renumber(blocks))
}

/// Reassign every position per the requested order.
///
/// Ids not present in the document are ignored; blocks the order does not
/// mention keep their relative order after the mentioned ones.
pub fn reorder(doc: &DesignDocument, ordered_ids: &[String]) -> DesignDocument {
    let current = doc.ordered_blocks();

    let mut blocks: Vec<BlockInstance> = Vec::with_capacity(current.len());
    for id in ordered_ids {
        if let Some(block) = current.iter().find(|b| &b.id == id) {
            if !blocks.iter().any(|b| &b.id == id) {
                blocks.push((*block).clone());
            }
        }
    }
    for block in &current {
        if !blocks.iter().any(|b| b.id == block.id) {
            blocks.push((*block).clone());
        }
    }

    with_blocks(doc, renumber(blocks))
}

/// Drag-drop semantics: remove the block at render index `from` and
/// re-insert it at index `to`; everything between shifts by one slot.
///
/// No-op when `from == to` or either index is out of range.
pub fn move_to(doc: &DesignDocument, from: usize, to: usize) -> DesignDocument {
    let len = doc.blocks.len();
    if from == to || from >= len || to >= len {
        return doc.clone();
    }

    let mut blocks: Vec<BlockInstance> = doc.ordered_blocks().into_iter().cloned().collect();
    let dragged = blocks.remove(from);
    blocks.insert(to, dragged);

    with_blocks(doc, renumber(blocks))
}

/// Flip visibility of the instance with `id`. Position is untouched;
/// hidden blocks stay in the document and are skipped at render time.
pub fn toggle_visibility(doc: &DesignDocument, id: &str) -> DesignDocument {
    let mut next = doc.clone();
    if let Some(block) = next.blocks.iter_mut().find(|b| b.id == id) {
        block.visible = !block.visible;
    }
    next
}

/// Replace the settings bag on the instance with `id`.
///
/// Whole-bag replacement, not a deep merge. The engine performs no shape
/// validation; interpreting settings is each block kind's concern.
pub fn set_settings(doc: &DesignDocument, id: &str, settings: Option<Value>) -> DesignDocument {
    let mut next = doc.clone();
    if let Some(block) = next.blocks.iter_mut().find(|b| b.id == id) {
        block.settings = settings;
    }
    next
}

/// Remove every instance. The confirmation dialog is the UI's concern.
pub fn clear_all(doc: &DesignDocument) -> DesignDocument {
    let mut next = doc.clone();
    next.blocks.clear();
    next
}

fn renumber(mut blocks: Vec<BlockInstance>) -> Vec<BlockInstance> {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.position = index as u32;
    }
    blocks
}

fn with_blocks(doc: &DesignDocument, blocks: Vec<BlockInstance>) -> DesignDocument {
    let mut next = doc.clone();
    next.blocks = blocks;
    next
}
