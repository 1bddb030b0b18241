//! Error types for the editor

use crate::mutations::MutationError;
use crate::store::StoreError;
use pagestudio_document::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Document format error: {0}")]
    Format(#[from] FormatError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),
}
