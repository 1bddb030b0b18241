//! Branding tokens, propagated once at the page root.

use pagestudio_document::DesignDocument;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub brand_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub button_radius: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl From<&DesignDocument> for Theme {
    fn from(doc: &DesignDocument) -> Self {
        Self {
            brand_color: doc.brand_color.clone(),
            secondary_color: doc.secondary_color.clone(),
            font_family: doc.font_family.clone(),
            button_radius: doc.button_radius,
            logo_url: doc.logo_url.clone(),
        }
    }
}

impl Theme {
    /// CSS custom properties applied at the page root; every block
    /// inherits branding from here instead of re-reading the document.
    pub fn style_vars(&self) -> String {
        format!(
            "--brand-color: {}; --brand-secondary: {}; --button-radius: {}px; font-family: {}",
            self.brand_color, self.secondary_color, self.button_radius, self.font_family
        )
    }

    pub fn button_style(&self) -> String {
        format!(
            "background: {}; border-radius: {}px",
            self.brand_color, self.button_radius
        )
    }
}
