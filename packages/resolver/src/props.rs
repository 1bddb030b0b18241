//! Resolved prop bags.
//!
//! Derived per render, never persisted. Each variant is exactly what one
//! block renderer consumes after the precedence chain ran; renderers add
//! no fallbacks of their own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockProps {
    Hero(HeroProps),
    About(AboutProps),
    Agenda(AgendaProps),
    Speakers(SpeakersProps),
    Tickets(TicketsProps),
    Footer(FooterProps),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    pub title: String,
    pub tagline: String,
    /// Empty when no date is resolvable anywhere.
    pub date_label: String,
    pub time_label: String,
    pub location: String,
    pub cta_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutProps {
    pub heading: String,
    pub body: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaProps {
    pub heading: String,
    pub days: Vec<AgendaDay>,
}

/// One agenda day tab: label plus its sessions in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDay {
    pub day: u32,
    pub label: String,
    pub sessions: Vec<SessionProps>,
}

/// Day tab without sessions, for the preview hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTab {
    pub day: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProps {
    pub title: String,
    pub speaker: String,
    pub time_label: String,
    pub duration_label: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakersProps {
    pub heading: String,
    pub speakers: Vec<SpeakerProps>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerProps {
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Avatar fallback when no photo exists, e.g. "AR".
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsProps {
    pub heading: String,
    pub tickets: Vec<TicketProps>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketProps {
    pub name: String,
    pub price_label: String,
    pub description: String,
    pub perks: Vec<String>,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterProps {
    pub event_name: String,
    pub quick_links: Vec<LinkProps>,
    pub social_links: Vec<LinkProps>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProps {
    pub label: String,
    pub url: String,
}
