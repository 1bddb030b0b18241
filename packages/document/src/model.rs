//! Document and block-instance types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::warn;

/// A block placed on a page.
///
/// The instance id equals its catalog kind id: at most one instance per
/// kind exists in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInstance {
    pub id: String,

    /// Zero-based render order. Unique and contiguous within a document.
    pub position: u32,

    /// Hidden blocks are skipped at render time but kept in the document.
    #[serde(rename = "isVisible", default = "default_true")]
    pub visible: bool,

    /// Opaque per-kind override bag. The engine never validates its shape;
    /// each block kind interprets its own settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Unrecognized fields, preserved on round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlockInstance {
    pub fn new(id: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            position,
            visible: true,
            settings: None,
            extra: Map::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_brand_color() -> String {
    "#6366f1".to_string()
}

fn default_secondary_color() -> String {
    "#8b5cf6".to_string()
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_button_radius() -> u16 {
    8
}

/// The serializable composition + branding state of one event page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDocument {
    #[serde(rename = "activeBlocks", default)]
    pub blocks: Vec<BlockInstance>,

    #[serde(default = "default_brand_color")]
    pub brand_color: String,

    #[serde(rename = "brandColorSecondary", default = "default_secondary_color")]
    pub secondary_color: String,

    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Corner radius for buttons, in pixels.
    #[serde(default = "default_button_radius")]
    pub button_radius: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Unrecognized top-level fields, preserved on round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DesignDocument {
    fn default() -> Self {
        Self {
            blocks: Vec::new(),
            brand_color: default_brand_color(),
            secondary_color: default_secondary_color(),
            font_family: default_font_family(),
            button_radius: default_button_radius(),
            logo_url: None,
            extra: Map::new(),
        }
    }
}

impl DesignDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self, id: &str) -> Option<&BlockInstance> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn contains_kind(&self, id: &str) -> bool {
        self.blocks.iter().any(|b| b.id == id)
    }

    /// Blocks in render order: strictly `position` ascending, equal
    /// positions broken by original array index (stable sort).
    pub fn ordered_blocks(&self) -> Vec<&BlockInstance> {
        let mut ordered: Vec<&BlockInstance> = self.blocks.iter().collect();
        ordered.sort_by_key(|b| b.position);
        ordered
    }

    /// Whether positions form the permutation `0..n-1` and kind ids are
    /// unique.
    pub fn is_well_formed(&self) -> bool {
        let n = self.blocks.len();

        let mut seen_positions = vec![false; n];
        for block in &self.blocks {
            let p = block.position as usize;
            if p >= n || seen_positions[p] {
                return false;
            }
            seen_positions[p] = true;
        }

        let mut seen_ids = HashSet::new();
        self.blocks.iter().all(|b| seen_ids.insert(b.id.as_str()))
    }

    /// Self-heal a malformed document.
    ///
    /// Duplicate kind ids keep their first occurrence; positions are then
    /// re-derived from array order rather than trusting stored values.
    /// Well-formed documents are returned untouched so valid stored
    /// positions survive arbitrary array order.
    pub fn normalized(&self) -> Self {
        if self.is_well_formed() {
            return self.clone();
        }

        warn!(
            blocks = self.blocks.len(),
            "design document malformed; re-deriving block positions"
        );

        let mut healed = self.clone();
        let mut seen = HashSet::new();
        healed.blocks.retain(|b| seen.insert(b.id.clone()));
        for (index, block) in healed.blocks.iter_mut().enumerate() {
            block.position = index as u32;
        }
        healed
    }
}
