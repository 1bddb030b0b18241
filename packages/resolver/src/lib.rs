//! # Content Resolver
//!
//! Turns a placed block plus the data around it into the one concrete
//! prop bag its renderer consumes.
//!
//! Every field follows the same strict precedence chain:
//!
//! 1. the block's own `settings` override, when present and non-empty
//! 2. live domain data (event, speakers, sessions, tickets)
//! 3. localized default copy, only when both above are absent
//!
//! Collections are tri-state: an *explicitly empty* list from settings or
//! domain data renders as empty, while an *absent* list falls back to
//! localized samples. The distinction is carried by [`FieldState`] and
//! applied through one shared [`resolve_field`] helper so no block drifts
//! from the rule.
//!
//! Resolution never fails. Malformed domain data (bad timestamps, missing
//! names, unparsable prices) degrades to placeholders per block, and a
//! degraded block never blocks its siblings.

pub mod content;
pub mod field;
pub mod locale;
pub mod props;
mod resolve;
pub mod time;

#[cfg(test)]
mod tests_resolution;

#[cfg(test)]
mod tests_derivations;

pub use content::{EventContent, EventRecord, SessionRecord, Speaker, Ticket};
pub use field::{resolve_field, FieldState};
pub use locale::{DefaultCopy, EnglishCopy};
pub use props::{
    AboutProps, AgendaDay, AgendaProps, BlockProps, DayTab, FooterProps, HeroProps, LinkProps,
    SessionProps, SpeakerProps, SpeakersProps, TicketProps, TicketsProps,
};
pub use resolve::{day_tabs, Resolver};
