//! # Design Document Model
//!
//! The serializable state of one event page: the ordered set of placed
//! blocks plus the global branding tokens.
//!
//! The document is a value type. Every editing operation computes a new
//! document; nothing mutates one in place where a caller can observe it.
//! `position` is authoritative for render order (array order is not), and
//! documents loaded from storage self-heal instead of rejecting partially
//! written state.

mod format;
mod model;

pub use format::{from_json, to_json, FormatError};
pub use model::{BlockInstance, DesignDocument};
