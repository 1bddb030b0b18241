//! # Render Pipeline
//!
//! One registry, three call sites. The live editor canvas, the public
//! landing page, and the detached preview tab all go through the same
//! kind-keyed mapping from resolved props to render nodes, so a document
//! renders bit-for-bit identically everywhere.
//!
//! The preview tab is the odd one out only in where its data comes from:
//! it consumes one [`PreviewSnapshot`] serialized by the editor and
//! performs no further queries.
//!
//! Unknown block kinds render nothing. Locked blocks (Pro kind, free
//! plan) render a lock affordance and are never dropped from the
//! document.

pub mod blocks;
pub mod node;
pub mod page;
pub mod registry;
pub mod snapshot;
pub mod theme;

pub use node::RenderNode;
pub use page::{compose, render_page, BlockState, RenderedBlock};
pub use registry::{BlockRenderer, RendererRegistry};
pub use snapshot::{PreviewSnapshot, SnapshotContent, SnapshotError};
pub use theme::Theme;
