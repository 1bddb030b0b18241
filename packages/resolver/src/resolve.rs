//! Per-kind resolution through the settings → domain → default chain.

use crate::content::{EventContent, SessionRecord, Speaker, Ticket};
use crate::field::{resolve_field, FieldState};
use crate::locale::DefaultCopy;
use crate::props::{
    AboutProps, AgendaDay, AgendaProps, BlockProps, DayTab, FooterProps, HeroProps, LinkProps,
    SessionProps, SpeakerProps, SpeakersProps, TicketProps, TicketsProps,
};
use crate::time;
use chrono::Datelike;
use pagestudio_document::BlockInstance;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Resolves placed blocks against one render cycle's domain data.
pub struct Resolver<'a> {
    content: &'a EventContent,
    copy: &'a dyn DefaultCopy,
}

impl<'a> Resolver<'a> {
    pub fn new(content: &'a EventContent, copy: &'a dyn DefaultCopy) -> Self {
        Self { content, copy }
    }

    /// Produce the prop bag for one block instance. Kinds without a
    /// content resolver yield `None` and render nothing; that keeps old
    /// documents loadable under a newer catalog and vice versa.
    #[instrument(skip_all, fields(block = %instance.id))]
    pub fn resolve(&self, instance: &BlockInstance) -> Option<BlockProps> {
        let settings = instance.settings.as_ref();
        match instance.id.as_str() {
            "hero" => Some(BlockProps::Hero(self.hero(settings))),
            "about" => Some(BlockProps::About(self.about(settings))),
            "agenda" => Some(BlockProps::Agenda(self.agenda(settings))),
            "speakers" => Some(BlockProps::Speakers(self.speakers(settings))),
            "tickets" => Some(BlockProps::Tickets(self.tickets(settings))),
            "footer" => Some(BlockProps::Footer(self.footer(settings))),
            other => {
                debug!(kind = other, "no content resolver for kind");
                None
            }
        }
    }

    fn hero(&self, s: Option<&Value>) -> HeroProps {
        let event = self.content.event.as_ref();

        let venue_city = event
            .map(|e| {
                [e.venue.as_deref(), e.city.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        let starts_at = event.and_then(|e| e.starts_at.as_deref());

        let background_image_url = match text_setting(s, "backgroundImageUrl") {
            FieldState::Set(url) => Some(url),
            _ => event.and_then(|e| e.cover_image_url.clone()),
        };

        HeroProps {
            title: resolve_field(
                text_setting(s, "title"),
                FieldState::from_text(event.and_then(|e| e.name.as_deref())),
                || self.copy.text("hero.title"),
                false,
            ),
            tagline: resolve_field(
                text_setting(s, "tagline"),
                FieldState::from_text(event.and_then(|e| e.tagline.as_deref())),
                || self.copy.text("hero.tagline"),
                false,
            ),
            date_label: resolve_field(
                text_setting(s, "dateLabel"),
                FieldState::from_text(Some(&time::format_date(starts_at))),
                || self.copy.text("hero.date"),
                false,
            ),
            time_label: resolve_field(
                text_setting(s, "timeLabel"),
                FieldState::from_text(Some(&time::format_time(starts_at))),
                || self.copy.text("hero.time"),
                false,
            ),
            location: resolve_field(
                text_setting(s, "location"),
                FieldState::from_text(Some(&venue_city)),
                || self.copy.text("hero.location"),
                false,
            ),
            cta_label: resolve_field(
                text_setting(s, "ctaLabel"),
                FieldState::Absent,
                || self.copy.text("hero.cta"),
                false,
            ),
            background_image_url,
        }
    }

    fn about(&self, s: Option<&Value>) -> AboutProps {
        let event = self.content.event.as_ref();

        AboutProps {
            heading: resolve_field(
                text_setting(s, "heading"),
                FieldState::Absent,
                || self.copy.text("about.heading"),
                false,
            ),
            body: resolve_field(
                text_setting(s, "body"),
                FieldState::from_text(event.and_then(|e| e.description.as_deref())),
                || self.copy.text("about.body"),
                false,
            ),
            features: resolve_field(
                list_setting::<String>(s, "features"),
                FieldState::Absent,
                || self.sample_features(),
                true,
            ),
        }
    }

    fn agenda(&self, s: Option<&Value>) -> AgendaProps {
        let sessions: Vec<SessionRecord> = resolve_field(
            list_setting(s, "sessions"),
            FieldState::from_vec(self.content.sessions.clone()),
            || self.sample_sessions(),
            true,
        );

        let days = group_by_day(&sessions)
            .into_iter()
            .map(|(day, group)| AgendaDay {
                day,
                label: time::day_label(day, representative_date(&group)),
                sessions: group.iter().map(|r| self.session_props(r)).collect(),
            })
            .collect();

        AgendaProps {
            heading: resolve_field(
                text_setting(s, "heading"),
                FieldState::Absent,
                || self.copy.text("agenda.heading"),
                false,
            ),
            days,
        }
    }

    fn session_props(&self, record: &SessionRecord) -> SessionProps {
        SessionProps {
            title: non_blank(record.title.as_deref())
                .unwrap_or_else(|| self.copy.text("session.untitled")),
            speaker: record.speaker.clone().unwrap_or_default(),
            time_label: time::format_time(record.starts_at.as_deref()),
            duration_label: time::duration_label(
                record.starts_at.as_deref(),
                record.ends_at.as_deref(),
                &self.copy.text("session.duration.tba"),
            ),
            location: record.location.clone().unwrap_or_default(),
        }
    }

    fn speakers(&self, s: Option<&Value>) -> SpeakersProps {
        let records: Vec<Speaker> = resolve_field(
            list_setting(s, "speakers"),
            FieldState::from_vec(self.content.speakers.clone()),
            || self.sample_speakers(),
            true,
        );

        let speakers = records
            .iter()
            .map(|record| {
                let name = non_blank(record.name.as_deref())
                    .unwrap_or_else(|| self.copy.text("speaker.unnamed"));
                SpeakerProps {
                    initials: initials(&name),
                    name,
                    role: record.role.clone().unwrap_or_default(),
                    company: record.company.clone().unwrap_or_default(),
                    photo_url: record.photo_url.clone(),
                }
            })
            .collect();

        SpeakersProps {
            heading: resolve_field(
                text_setting(s, "heading"),
                FieldState::Absent,
                || self.copy.text("speakers.heading"),
                false,
            ),
            speakers,
        }
    }

    fn tickets(&self, s: Option<&Value>) -> TicketsProps {
        let records: Vec<Ticket> = resolve_field(
            list_setting(s, "tickets"),
            FieldState::from_vec(self.content.tickets.clone()),
            || self.sample_tickets(),
            true,
        );

        let computed_popular = pick_popular(&records);
        let tickets = records
            .iter()
            .enumerate()
            .map(|(index, record)| TicketProps {
                name: non_blank(record.name.as_deref())
                    .unwrap_or_else(|| self.copy.text("ticket.unnamed")),
                price_label: self.price_label(record),
                description: record.description.clone().unwrap_or_default(),
                perks: record.perks.clone().unwrap_or_default(),
                popular: record.popular == Some(true) || computed_popular == Some(index),
            })
            .collect();

        TicketsProps {
            heading: resolve_field(
                text_setting(s, "heading"),
                FieldState::Absent,
                || self.copy.text("tickets.heading"),
                false,
            ),
            tickets,
        }
    }

    fn price_label(&self, ticket: &Ticket) -> String {
        match (&ticket.price, ticket.amount()) {
            // Already formatted by the organizer; show it as given.
            (Some(Value::String(raw)), Some(_)) => raw.trim().to_string(),
            (_, Some(amount)) => time::format_amount(amount),
            _ => self.copy.text("ticket.free"),
        }
    }

    fn footer(&self, s: Option<&Value>) -> FooterProps {
        let event = self.content.event.as_ref();

        // Quick links and social URLs follow the settings-object rule:
        // once a settings object exists, an absent link means "don't
        // show it"; only a missing settings object shows the samples.
        let quick_links = match s {
            None => self.sample_quick_links(),
            Some(_) => match list_setting::<LinkProps>(s, "quickLinks") {
                FieldState::Set(links) => links,
                _ => Vec::new(),
            },
        };

        let social_links = match s {
            None => self.sample_social_links(),
            Some(_) => {
                let mut links = Vec::new();
                for (key, label_key) in [
                    ("twitterUrl", "footer.social.twitter"),
                    ("linkedinUrl", "footer.social.linkedin"),
                    ("instagramUrl", "footer.social.instagram"),
                ] {
                    if let FieldState::Set(url) = text_setting(s, key) {
                        links.push(LinkProps {
                            label: self.copy.text(label_key),
                            url,
                        });
                    }
                }
                links
            }
        };

        let derived_copyright = event.and_then(|e| e.name.as_deref()).map(|name| {
            let year = event
                .and_then(|e| e.starts_at.as_deref())
                .and_then(time::parse_timestamp)
                .map(|dt| dt.year());
            match year {
                Some(year) => format!("© {} {}", year, name),
                None => format!("© {}", name),
            }
        });

        FooterProps {
            event_name: resolve_field(
                text_setting(s, "eventName"),
                FieldState::from_text(event.and_then(|e| e.name.as_deref())),
                || self.copy.text("hero.title"),
                false,
            ),
            quick_links,
            social_links,
            copyright: resolve_field(
                text_setting(s, "copyright"),
                FieldState::from_text(derived_copyright.as_deref()),
                || self.copy.text("footer.copyright"),
                false,
            ),
        }
    }

    fn sample_features(&self) -> Vec<String> {
        ["about.feature1", "about.feature2", "about.feature3"]
            .iter()
            .map(|key| self.copy.text(key))
            .collect()
    }

    fn sample_sessions(&self) -> Vec<SessionRecord> {
        vec![
            SessionRecord {
                title: Some(self.copy.text("session.sample1.title")),
                speaker: Some(self.copy.text("session.sample1.speaker")),
                starts_at: Some("2026-06-12T09:00:00Z".to_string()),
                ends_at: Some("2026-06-12T10:00:00Z".to_string()),
                day: Some(1),
                location: None,
            },
            SessionRecord {
                title: Some(self.copy.text("session.sample2.title")),
                speaker: Some(self.copy.text("session.sample2.speaker")),
                starts_at: Some("2026-06-12T10:30:00Z".to_string()),
                ends_at: Some("2026-06-12T11:15:00Z".to_string()),
                day: Some(1),
                location: None,
            },
        ]
    }

    fn sample_speakers(&self) -> Vec<Speaker> {
        vec![
            Speaker {
                name: Some(self.copy.text("speaker.sample1.name")),
                role: Some(self.copy.text("speaker.sample1.role")),
                company: Some(self.copy.text("speaker.sample1.company")),
                photo_url: None,
            },
            Speaker {
                name: Some(self.copy.text("speaker.sample2.name")),
                role: Some(self.copy.text("speaker.sample2.role")),
                company: Some(self.copy.text("speaker.sample2.company")),
                photo_url: None,
            },
        ]
    }

    fn sample_tickets(&self) -> Vec<Ticket> {
        vec![
            Ticket {
                name: Some(self.copy.text("ticket.sample1.name")),
                description: Some(self.copy.text("ticket.sample1.description")),
                price: Some(Value::from(49)),
                popular: None,
                perks: None,
            },
            Ticket {
                name: Some(self.copy.text("ticket.sample2.name")),
                description: Some(self.copy.text("ticket.sample2.description")),
                price: Some(Value::from(149)),
                popular: None,
                perks: None,
            },
        ]
    }

    fn sample_quick_links(&self) -> Vec<LinkProps> {
        [
            ("footer.link.home", "#"),
            ("footer.link.agenda", "#agenda"),
            ("footer.link.tickets", "#tickets"),
        ]
        .iter()
        .map(|(key, url)| LinkProps {
            label: self.copy.text(key),
            url: (*url).to_string(),
        })
        .collect()
    }

    fn sample_social_links(&self) -> Vec<LinkProps> {
        [
            ("footer.social.twitter", "https://twitter.com"),
            ("footer.social.linkedin", "https://linkedin.com"),
        ]
        .iter()
        .map(|(key, url)| LinkProps {
            label: self.copy.text(key),
            url: (*url).to_string(),
        })
        .collect()
    }
}

/// Day tabs for the preview hand-off, derived with the same grouping the
/// agenda block uses.
pub fn day_tabs(sessions: &[SessionRecord]) -> Vec<DayTab> {
    group_by_day(sessions)
        .into_iter()
        .map(|(day, group)| DayTab {
            day,
            label: time::day_label(day, representative_date(&group)),
        })
        .collect()
}

fn group_by_day(sessions: &[SessionRecord]) -> Vec<(u32, Vec<&SessionRecord>)> {
    let mut days: Vec<(u32, Vec<&SessionRecord>)> = Vec::new();
    for session in sessions {
        let day = session.day.unwrap_or(1);
        match days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, group)) => group.push(session),
            None => days.push((day, vec![session])),
        }
    }
    days.sort_by_key(|(day, _)| *day);
    days
}

/// First session in the group with a parseable start gives the day its
/// date.
fn representative_date<'s>(group: &[&'s SessionRecord]) -> Option<&'s str> {
    group
        .iter()
        .find_map(|s| s.starts_at.as_deref().filter(|raw| time::parse_timestamp(raw).is_some()))
}

/// Index of the computed "most popular" ticket, or `None` when explicit
/// flags exist (those win untouched). Ties keep the earliest ticket.
fn pick_popular(records: &[Ticket]) -> Option<usize> {
    if records.iter().any(|t| t.popular == Some(true)) {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, ticket) in records.iter().enumerate() {
        if let Some(amount) = ticket.amount() {
            match best {
                Some((_, top)) if amount <= top => {}
                _ => best = Some((index, amount)),
            }
        }
    }
    best.map(|(index, _)| index)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn text_setting(settings: Option<&Value>, key: &str) -> FieldState<String> {
    match settings.and_then(|s| s.get(key)) {
        Some(Value::String(raw)) => FieldState::from_text(Some(raw)),
        Some(Value::Null) | None => FieldState::Absent,
        Some(other) => {
            debug!(key, value = %other, "non-text setting ignored");
            FieldState::Absent
        }
    }
}

fn list_setting<T: DeserializeOwned>(settings: Option<&Value>, key: &str) -> FieldState<Vec<T>> {
    match settings.and_then(|s| s.get(key)) {
        None | Some(Value::Null) => FieldState::Absent,
        Some(Value::Array(items)) if items.is_empty() => FieldState::Empty,
        Some(value @ Value::Array(_)) => match serde_json::from_value::<Vec<T>>(value.clone()) {
            Ok(items) => FieldState::Set(items),
            Err(e) => {
                warn!(key, error = %e, "unusable settings list; falling through");
                FieldState::Absent
            }
        },
        Some(_) => {
            warn!(key, "settings list is not an array; falling through");
            FieldState::Absent
        }
    }
}
