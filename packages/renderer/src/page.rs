//! Document → rendered page.
//!
//! [`render_page`] is the one routine behind the editor canvas, the
//! public page, and the preview tab. Each caller supplies its own data
//! source and entitlement flag; the traversal itself never branches on
//! which surface is asking.

use crate::node::RenderNode;
use crate::registry::RendererRegistry;
use crate::theme::Theme;
use pagestudio_catalog::Catalog;
use pagestudio_document::DesignDocument;
use pagestudio_resolver::{DefaultCopy, EventContent, Resolver};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What one placed block became after the pipeline ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum BlockState {
    Rendered { node: RenderNode },
    /// Pro kind on a free plan. The block stays in the document; only
    /// its output is replaced.
    Locked { label: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedBlock {
    pub kind: String,
    pub position: u32,
    #[serde(flatten)]
    pub state: BlockState,
}

/// Run the full pipeline over a document.
///
/// Blocks drop out silently when hidden, unknown to the catalog, without
/// a content resolver, or without a registered renderer. Order follows
/// `position`, and entitlement is re-checked on every call.
#[instrument(skip_all, fields(blocks = doc.blocks.len(), is_pro))]
pub fn render_page(
    doc: &DesignDocument,
    catalog: &Catalog,
    registry: &RendererRegistry,
    content: &EventContent,
    copy: &dyn DefaultCopy,
    is_pro: bool,
) -> Vec<RenderedBlock> {
    let resolver = Resolver::new(content, copy);
    let theme = Theme::from(doc);

    let mut rendered = Vec::new();
    for instance in doc.ordered_blocks() {
        if !instance.visible {
            continue;
        }

        let Some(kind) = catalog.get(&instance.id) else {
            debug!(kind = %instance.id, "skipping kind unknown to catalog");
            continue;
        };

        if kind.is_locked(is_pro) {
            rendered.push(RenderedBlock {
                kind: instance.id.clone(),
                position: instance.position,
                state: BlockState::Locked {
                    label: kind.meta.label.clone(),
                },
            });
            continue;
        }

        let Some(props) = resolver.resolve(instance) else {
            continue;
        };
        let Some(renderer) = registry.get(&instance.id) else {
            debug!(kind = %instance.id, "no renderer registered");
            continue;
        };
        let Some(node) = renderer.render(&props, &theme) else {
            continue;
        };

        rendered.push(RenderedBlock {
            kind: instance.id.clone(),
            position: instance.position,
            state: BlockState::Rendered { node },
        });
    }
    rendered
}

/// Rendered blocks stitched under a single themed page root, with lock
/// states materialized as placeholder nodes.
pub fn compose(
    doc: &DesignDocument,
    catalog: &Catalog,
    registry: &RendererRegistry,
    content: &EventContent,
    copy: &dyn DefaultCopy,
    is_pro: bool,
) -> RenderNode {
    let theme = Theme::from(doc);
    let blocks = render_page(doc, catalog, registry, content, copy, is_pro);

    RenderNode::element("div")
        .with_class("page-root")
        .with_attr("style", theme.style_vars())
        .with_children(blocks.into_iter().map(|block| match block.state {
            BlockState::Rendered { node } => node,
            BlockState::Locked { label } => RenderNode::element("section")
                .with_class("block-locked")
                .with_child(RenderNode::labeled(
                    "p",
                    format!("{} is available on the Pro plan", label),
                )),
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagestudio_document::BlockInstance;
    use pagestudio_resolver::EnglishCopy;

    fn doc_with(ids: &[&str]) -> DesignDocument {
        let mut doc = DesignDocument::new();
        for (index, id) in ids.iter().enumerate() {
            doc.blocks.push(BlockInstance::new(*id, index as u32));
        }
        doc
    }

    fn render(doc: &DesignDocument, is_pro: bool) -> Vec<RenderedBlock> {
        render_page(
            doc,
            &Catalog::builtin(),
            &RendererRegistry::standard(),
            &EventContent::default(),
            &EnglishCopy::new(),
            is_pro,
        )
    }

    #[test]
    fn test_blocks_render_in_position_order() {
        let mut doc = DesignDocument::new();
        doc.blocks.push(BlockInstance::new("footer", 2));
        doc.blocks.push(BlockInstance::new("hero", 0));
        doc.blocks.push(BlockInstance::new("about", 1));

        let blocks = render(&doc, false);
        let kinds: Vec<&str> = blocks.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(kinds, vec!["hero", "about", "footer"]);
    }

    #[test]
    fn test_hidden_blocks_are_skipped() {
        let mut doc = doc_with(&["hero", "about"]);
        doc.blocks[1].visible = false;

        let blocks = render(&doc, false);
        let kinds: Vec<&str> = blocks.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(kinds, vec!["hero"]);
    }

    #[test]
    fn test_unknown_kind_renders_nothing() {
        let doc = doc_with(&["hero", "video"]);

        let blocks = render(&doc, false);
        let kinds: Vec<&str> = blocks.iter().map(|b| b.kind.as_str()).collect();
        assert_eq!(kinds, vec!["hero"]);
    }

    #[test]
    fn test_pro_kind_locks_on_free_plan_only() {
        let doc = doc_with(&["gallery"]);

        let free = render(&doc, false);
        assert_eq!(free.len(), 1);
        assert_eq!(
            free[0].state,
            BlockState::Locked {
                label: "Gallery".to_string()
            }
        );

        // On a Pro plan the gate opens, but gallery has no content
        // resolver yet, so it drops out instead of locking.
        let pro = render(&doc, true);
        assert!(pro.is_empty());
    }

    #[test]
    fn test_compose_wraps_blocks_under_themed_root() {
        let doc = doc_with(&["hero", "gallery"]);
        let root = compose(
            &doc,
            &Catalog::builtin(),
            &RendererRegistry::standard(),
            &EventContent::default(),
            &EnglishCopy::new(),
            false,
        );

        let RenderNode::Element {
            tag,
            attributes,
            children,
        } = &root
        else {
            panic!("expected element root");
        };
        assert_eq!(tag, "div");
        assert!(attributes.get("style").unwrap().contains("--brand-color"));
        // Hero renders, gallery becomes a lock placeholder.
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_rendered_block_wire_format() {
        let doc = doc_with(&["gallery"]);
        let blocks = render(&doc, false);

        let json = serde_json::to_value(&blocks).unwrap();
        assert_eq!(json[0]["kind"], "gallery");
        assert_eq!(json[0]["state"], "locked");
        assert_eq!(json[0]["label"], "Gallery");
    }
}
