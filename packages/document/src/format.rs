//! Persistence format.
//!
//! Both persistence adapters (local draft cache and remote store) accept
//! and return this JSON shape. Loading is lenient: absent fields default,
//! unknown fields ride along in the `extra` maps, and malformed block
//! lists self-heal instead of failing the load.

use crate::model::DesignDocument;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a persisted document. Always returns a well-formed document.
pub fn from_json(raw: &str) -> Result<DesignDocument, FormatError> {
    let doc: DesignDocument = serde_json::from_str(raw)?;
    Ok(doc.normalized())
}

/// Serialize a document for persistence or preview hand-off.
pub fn to_json(doc: &DesignDocument) -> Result<String, FormatError> {
    Ok(serde_json::to_string(doc)?)
}
