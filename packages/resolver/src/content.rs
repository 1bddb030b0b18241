//! Resolver-friendly domain shapes.
//!
//! The hosted backend's records are mapped into these plain structs
//! before resolution; every field is optional because mapping failures
//! must degrade to placeholders, never fail a render. The `Option` on
//! each collection in [`EventContent`] carries the tri-state: `None`
//! means the backend never supplied it, `Some(vec![])` means it is
//! explicitly empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRecord {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    /// ISO-8601 timestamps as stored by the backend.
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Speaker {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    pub title: Option<String>,
    pub speaker: Option<String>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    /// Agenda day this session belongs to; sessions without one land on
    /// day 1.
    pub day: Option<u32>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Free-form: the backend stores numbers ("49"), formatted strings
    /// ("$49"), or nothing at all.
    pub price: Option<Value>,
    pub popular: Option<bool>,
    pub perks: Option<Vec<String>>,
}

impl Ticket {
    /// Numeric amount for price comparisons. Formatted strings count:
    /// "$100" compares as 100. Unparsable prices have no amount.
    pub fn amount(&self) -> Option<f64> {
        match self.price.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => {
                let digits: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                if digits.is_empty() {
                    None
                } else {
                    digits.parse().ok()
                }
            }
            _ => None,
        }
    }
}

/// Everything the backend contributes to one render cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventContent {
    pub event: Option<EventRecord>,
    pub speakers: Option<Vec<Speaker>>,
    pub sessions: Option<Vec<SessionRecord>>,
    pub tickets: Option<Vec<Ticket>>,
}
