//! Preview hand-off.
//!
//! The preview tab runs detached from the editor and never queries the
//! backend. Everything it needs travels in one serialized
//! [`PreviewSnapshot`]: the unsaved document plus the content the editor
//! already had in hand, with day tabs precomputed so the preview shell
//! can draw its chrome before any block renders.

use crate::page::{render_page, RenderedBlock};
use crate::registry::RendererRegistry;
use pagestudio_catalog::Catalog;
use pagestudio_document::DesignDocument;
use pagestudio_resolver::{day_tabs, DayTab, DefaultCopy, EventContent};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to serialize preview snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Content bundled into the snapshot, shaped like [`EventContent`] with
/// the derived day tabs alongside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotContent {
    #[serde(flatten)]
    pub content: EventContent,
    pub days: Vec<DayTab>,
}

/// A self-contained frame of editor state for the preview tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSnapshot {
    #[serde(flatten)]
    pub document: DesignDocument,
    pub content: SnapshotContent,
}

impl PreviewSnapshot {
    /// Freeze the current editor state, unsaved edits included.
    pub fn capture(document: &DesignDocument, content: &EventContent) -> Self {
        let days = day_tabs(content.sessions.as_deref().unwrap_or_default());
        Self {
            document: document.clone(),
            content: SnapshotContent {
                content: content.clone(),
                days,
            },
        }
    }

    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a snapshot handed over from another tab. The embedded
    /// document goes through the same self-healing as any loaded one.
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        Ok(Self {
            document: snapshot.document.normalized(),
            content: snapshot.content,
        })
    }

    pub fn into_parts(self) -> (DesignDocument, EventContent) {
        (self.document, self.content.content)
    }

    /// Render the snapshot exactly as the other surfaces would render the
    /// live state.
    pub fn render(
        &self,
        catalog: &Catalog,
        registry: &RendererRegistry,
        copy: &dyn DefaultCopy,
        is_pro: bool,
    ) -> Vec<RenderedBlock> {
        render_page(
            &self.document,
            catalog,
            registry,
            &self.content.content,
            copy,
            is_pro,
        )
    }
}
