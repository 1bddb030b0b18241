//! # Block Catalog
//!
//! Static registry of the block kinds a page can be composed from.
//!
//! The catalog is pure data: it is loaded once, never mutated at runtime,
//! and consulted by the editor (what can be added, what is tier-gated) and
//! by the render pipeline (does this kind exist at all). Kinds unknown to
//! the catalog are tolerated everywhere downstream so that documents saved
//! by a newer catalog still load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Plan tier required to use a block kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Free,
    Pro,
}

/// Display metadata shown in the block picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMeta {
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl DisplayMeta {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            thumbnail: None,
        }
    }
}

/// Immutable catalog entry describing one kind of page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockKind {
    /// Stable key, e.g. `"hero"`. Doubles as the instance id in documents.
    pub id: String,

    pub tier: Tier,

    pub meta: DisplayMeta,
}

impl BlockKind {
    pub fn new(id: impl Into<String>, tier: Tier, meta: DisplayMeta) -> Self {
        Self {
            id: id.into(),
            tier,
            meta,
        }
    }

    /// Tier-gate predicate. Locked kinds stay in the document and render a
    /// lock affordance instead of content; entitlement is re-evaluated on
    /// every call, never cached.
    pub fn is_locked(&self, is_pro: bool) -> bool {
        self.tier == Tier::Pro && !is_pro
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Block kind '{0}' not found in catalog")]
    UnknownKind(String),
}

/// Ordered, id-indexed registry of block kinds
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    kinds: Vec<BlockKind>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind. Later registrations of the same id replace the
    /// earlier entry in place, keeping picker order stable.
    pub fn register(&mut self, kind: BlockKind) {
        match self.by_id.get(&kind.id) {
            Some(&index) => self.kinds[index] = kind,
            None => {
                self.by_id.insert(kind.id.clone(), self.kinds.len());
                self.kinds.push(kind);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&BlockKind> {
        self.by_id.get(id).map(|&index| &self.kinds[index])
    }

    pub fn require(&self, id: &str) -> Result<&BlockKind, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownKind(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Kinds in registration (picker) order
    pub fn kinds(&self) -> &[BlockKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The standard event-page catalog
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(BlockKind::new(
            "hero",
            Tier::Free,
            DisplayMeta::labeled("Hero"),
        ));
        catalog.register(BlockKind::new(
            "about",
            Tier::Free,
            DisplayMeta::labeled("About"),
        ));
        catalog.register(BlockKind::new(
            "agenda",
            Tier::Free,
            DisplayMeta::labeled("Agenda"),
        ));
        catalog.register(BlockKind::new(
            "speakers",
            Tier::Free,
            DisplayMeta::labeled("Speakers"),
        ));
        catalog.register(BlockKind::new(
            "tickets",
            Tier::Free,
            DisplayMeta::labeled("Tickets"),
        ));
        // gallery and countdown are picker entries only: neither has a
        // content resolver or renderer yet, so on a Pro plan they render
        // nothing. TODO: add gallery/countdown resolvers and renderers
        // before exposing them in the picker.
        catalog.register(BlockKind::new(
            "gallery",
            Tier::Pro,
            DisplayMeta::labeled("Gallery"),
        ));
        catalog.register(BlockKind::new(
            "countdown",
            Tier::Pro,
            DisplayMeta::labeled("Countdown"),
        ));
        catalog.register(BlockKind::new(
            "footer",
            Tier::Free,
            DisplayMeta::labeled("Footer"),
        ));
        catalog
    }
}
