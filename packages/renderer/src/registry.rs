//! Kind-keyed renderer registry.
//!
//! All three call sites share one registry instance (or equal copies of
//! [`RendererRegistry::standard`]), which is what makes their output
//! identical. Looking up a kind the registry does not know returns
//! `None` and the block renders nothing.

use crate::blocks;
use crate::node::RenderNode;
use crate::theme::Theme;
use pagestudio_resolver::BlockProps;
use std::collections::HashMap;

pub trait BlockRenderer {
    /// Render resolved props. Returns `None` when handed props of the
    /// wrong variant, so a mis-registered renderer degrades instead of
    /// panicking.
    fn render(&self, props: &BlockProps, theme: &Theme) -> Option<RenderNode>;
}

#[derive(Default)]
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn BlockRenderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind_id: impl Into<String>, renderer: Box<dyn BlockRenderer>) {
        self.renderers.insert(kind_id.into(), renderer);
    }

    pub fn get(&self, kind_id: &str) -> Option<&dyn BlockRenderer> {
        self.renderers.get(kind_id).map(Box::as_ref)
    }

    pub fn contains(&self, kind_id: &str) -> bool {
        self.renderers.contains_key(kind_id)
    }

    /// Registry with the standard event-page blocks installed.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("hero", Box::new(blocks::HeroRenderer));
        registry.register("about", Box::new(blocks::AboutRenderer));
        registry.register("agenda", Box::new(blocks::AgendaRenderer));
        registry.register("speakers", Box::new(blocks::SpeakersRenderer));
        registry.register("tickets", Box::new(blocks::TicketsRenderer));
        registry.register("footer", Box::new(blocks::FooterRenderer));
        registry
    }
}
