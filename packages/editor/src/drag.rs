//! Drag-and-drop interaction state.
//!
//! Strictly transient and component-local: none of this belongs in the
//! design document. The interaction accumulates a dragged index and a
//! drop target, and on drop emits a single [`Mutation::MoveBlock`] for
//! the session to commit.

use crate::mutations::Mutation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragInteraction {
    dragged: Option<usize>,
    drop_target: Option<usize>,
}

impl DragInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging the block at render index `index`.
    pub fn begin(&mut self, index: usize) {
        self.dragged = Some(index);
        self.drop_target = None;
    }

    /// Hover over a potential drop slot. Only honored while a drag is in
    /// progress and the target differs from the dragged index.
    pub fn hover(&mut self, index: usize) {
        match self.dragged {
            Some(dragged) if dragged != index => self.drop_target = Some(index),
            Some(_) => self.drop_target = None,
            None => {}
        }
    }

    /// Commit the drop: emits the reorder command and resets the
    /// interaction. Returns `None` when there is nothing to commit.
    pub fn commit(&mut self) -> Option<Mutation> {
        let mutation = match (self.dragged, self.drop_target) {
            (Some(from), Some(to)) => Some(Mutation::MoveBlock { from, to }),
            _ => None,
        };
        *self = Self::default();
        mutation
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn drop_target(&self) -> Option<usize> {
        self.drop_target
    }
}
