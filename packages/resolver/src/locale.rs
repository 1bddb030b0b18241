//! Localized default copy.
//!
//! String lookup itself is an external collaborator; the resolver only
//! depends on this injected trait. `EnglishCopy` bundles the English
//! sample strings so the engine, its tests, and the standalone preview
//! work without a translation backend.

use std::collections::HashMap;

/// Injected provider of localized default copy.
pub trait DefaultCopy {
    /// Look up one string by key. Unknown keys echo the key back, so a
    /// missing translation is visible but never fatal.
    fn text(&self, key: &str) -> String;
}

/// Bundled English defaults.
#[derive(Debug, Clone)]
pub struct EnglishCopy {
    strings: HashMap<&'static str, &'static str>,
}

impl Default for EnglishCopy {
    fn default() -> Self {
        let strings = HashMap::from([
            ("hero.title", "Your Event Name"),
            ("hero.tagline", "Two days of talks, workshops, and hallway conversations."),
            ("hero.date", "June 12–13, 2026"),
            ("hero.time", "9:00 AM"),
            ("hero.location", "San Francisco, CA"),
            ("hero.cta", "Get Tickets"),
            ("about.heading", "About the event"),
            (
                "about.body",
                "Tell attendees what makes your event worth their time: the theme, the people, and what they will take home.",
            ),
            ("about.feature1", "Hands-on workshops"),
            ("about.feature2", "Industry speakers"),
            ("about.feature3", "Networking sessions"),
            ("agenda.heading", "Agenda"),
            ("session.untitled", "Untitled session"),
            ("session.duration.tba", "TBA"),
            ("session.sample1.title", "Opening keynote"),
            ("session.sample1.speaker", "Alex Rivera"),
            ("session.sample2.title", "Building for scale"),
            ("session.sample2.speaker", "Sam Chen"),
            ("speakers.heading", "Speakers"),
            ("speaker.unnamed", "Speaker"),
            ("speaker.sample1.name", "Alex Rivera"),
            ("speaker.sample1.role", "CEO"),
            ("speaker.sample1.company", "Northlight"),
            ("speaker.sample2.name", "Sam Chen"),
            ("speaker.sample2.role", "Principal Engineer"),
            ("speaker.sample2.company", "Driftwood Labs"),
            ("tickets.heading", "Tickets"),
            ("ticket.free", "Free"),
            ("ticket.unnamed", "Ticket"),
            ("ticket.sample1.name", "General Admission"),
            ("ticket.sample1.description", "Full access to all talks"),
            ("ticket.sample2.name", "VIP"),
            ("ticket.sample2.description", "Front-row seats and the speaker dinner"),
            ("footer.link.home", "Home"),
            ("footer.link.agenda", "Agenda"),
            ("footer.link.tickets", "Tickets"),
            ("footer.social.twitter", "Twitter"),
            ("footer.social.linkedin", "LinkedIn"),
            ("footer.social.instagram", "Instagram"),
            ("footer.copyright", "© Your Event"),
        ]);
        Self { strings }
    }
}

impl EnglishCopy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DefaultCopy for EnglishCopy {
    fn text(&self, key: &str) -> String {
        self.strings
            .get(key)
            .map(|s| (*s).to_string())
            .unwrap_or_else(|| key.to_string())
    }
}
