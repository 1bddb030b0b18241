//! Precedence-chain and tri-state coverage across block kinds.

use crate::content::{EventContent, EventRecord, Speaker, Ticket};
use crate::locale::{DefaultCopy, EnglishCopy};
use crate::props::BlockProps;
use crate::resolve::Resolver;
use pagestudio_document::BlockInstance;
use serde_json::{json, Value};

fn instance(kind: &str, settings: Option<Value>) -> BlockInstance {
    let mut block = BlockInstance::new(kind, 0);
    block.settings = settings;
    block
}

fn content_with_event() -> EventContent {
    EventContent {
        event: Some(EventRecord {
            name: Some("DevConf".to_string()),
            tagline: Some("Ship faster".to_string()),
            description: Some("A conference about shipping.".to_string()),
            starts_at: Some("2026-06-12T09:00:00Z".to_string()),
            venue: Some("Moscone Center".to_string()),
            city: Some("San Francisco".to_string()),
            ..EventRecord::default()
        }),
        ..EventContent::default()
    }
}

fn hero(content: &EventContent, settings: Option<Value>) -> crate::props::HeroProps {
    let copy = EnglishCopy::new();
    let resolver = Resolver::new(content, &copy);
    match resolver.resolve(&instance("hero", settings)) {
        Some(BlockProps::Hero(props)) => props,
        other => panic!("expected hero props, got {:?}", other),
    }
}

#[test]
fn test_settings_beat_domain_beat_defaults() {
    let content = content_with_event();

    // Settings win.
    let props = hero(&content, Some(json!({ "title": "Custom Title" })));
    assert_eq!(props.title, "Custom Title");

    // Domain wins when settings are silent.
    let props = hero(&content, None);
    assert_eq!(props.title, "DevConf");
    assert_eq!(props.tagline, "Ship faster");
    assert_eq!(props.location, "Moscone Center, San Francisco");
    assert_eq!(props.date_label, "June 12, 2026");

    // Defaults only when both are absent.
    let props = hero(&EventContent::default(), None);
    assert_eq!(props.title, "Your Event Name");
    assert_eq!(props.cta_label, "Get Tickets");
}

#[test]
fn test_blank_setting_never_masks_domain() {
    let content = content_with_event();
    let props = hero(&content, Some(json!({ "title": "   " })));
    assert_eq!(props.title, "DevConf");
}

#[test]
fn test_unknown_kind_resolves_to_nothing() {
    let copy = EnglishCopy::new();
    let content = EventContent::default();
    let resolver = Resolver::new(&content, &copy);

    assert!(resolver.resolve(&instance("gallery", None)).is_none());
    assert!(resolver.resolve(&instance("not-a-kind", None)).is_none());
}

fn about_features(settings: Option<Value>) -> Vec<String> {
    let copy = EnglishCopy::new();
    let content = EventContent::default();
    let resolver = Resolver::new(&content, &copy);
    match resolver.resolve(&instance("about", settings)) {
        Some(BlockProps::About(props)) => props.features,
        other => panic!("expected about props, got {:?}", other),
    }
}

#[test]
fn test_about_features_tri_state() {
    // Absent settings fall back to the localized samples.
    let features = about_features(None);
    assert_eq!(features.len(), 3);
    assert_eq!(features[0], "Hands-on workshops");

    // Settings present but no features key: still absent.
    let features = about_features(Some(json!({ "heading": "Why come" })));
    assert_eq!(features.len(), 3);

    // Explicit empty renders empty, not samples.
    let features = about_features(Some(json!({ "features": [] })));
    assert!(features.is_empty());

    // Populated renders as given.
    let features = about_features(Some(json!({ "features": ["One", "Two"] })));
    assert_eq!(features, vec!["One", "Two"]);
}

fn resolved_speakers(
    content: &EventContent,
    settings: Option<Value>,
) -> crate::props::SpeakersProps {
    let copy = EnglishCopy::new();
    let resolver = Resolver::new(content, &copy);
    match resolver.resolve(&instance("speakers", settings)) {
        Some(BlockProps::Speakers(props)) => props,
        other => panic!("expected speakers props, got {:?}", other),
    }
}

#[test]
fn test_speakers_tri_state() {
    // No domain list at all: samples.
    let props = resolved_speakers(&EventContent::default(), None);
    assert_eq!(props.speakers.len(), 2);
    assert_eq!(props.speakers[0].name, "Alex Rivera");
    assert_eq!(props.speakers[0].initials, "AR");

    // Backend explicitly returned zero speakers: render none.
    let content = EventContent {
        speakers: Some(vec![]),
        ..EventContent::default()
    };
    let props = resolved_speakers(&content, None);
    assert!(props.speakers.is_empty());

    // Settings override beats a populated domain list.
    let content = EventContent {
        speakers: Some(vec![Speaker {
            name: Some("Domain Person".to_string()),
            ..Speaker::default()
        }]),
        ..EventContent::default()
    };
    let props = resolved_speakers(
        &content,
        Some(json!({ "speakers": [{ "name": "Settings Person" }] })),
    );
    assert_eq!(props.speakers.len(), 1);
    assert_eq!(props.speakers[0].name, "Settings Person");

    // Explicit empty in settings hides even a populated domain list.
    let props = resolved_speakers(&content, Some(json!({ "speakers": [] })));
    assert!(props.speakers.is_empty());
}

#[test]
fn test_speaker_missing_fields_degrade_to_placeholders() {
    let content = EventContent {
        speakers: Some(vec![Speaker::default()]),
        ..EventContent::default()
    };
    let props = resolved_speakers(&content, None);

    assert_eq!(props.speakers[0].name, "Speaker");
    assert_eq!(props.speakers[0].role, "");
    assert!(props.speakers[0].photo_url.is_none());
}

fn resolved_tickets(content: &EventContent, settings: Option<Value>) -> crate::props::TicketsProps {
    let copy = EnglishCopy::new();
    let resolver = Resolver::new(content, &copy);
    match resolver.resolve(&instance("tickets", settings)) {
        Some(BlockProps::Tickets(props)) => props,
        other => panic!("expected tickets props, got {:?}", other),
    }
}

#[test]
fn test_tickets_tri_state() {
    let props = resolved_tickets(&EventContent::default(), None);
    assert_eq!(props.tickets.len(), 2);
    assert_eq!(props.tickets[0].name, "General Admission");

    let content = EventContent {
        tickets: Some(vec![]),
        ..EventContent::default()
    };
    let props = resolved_tickets(&content, None);
    assert!(props.tickets.is_empty());

    let props = resolved_tickets(&EventContent::default(), Some(json!({ "tickets": [] })));
    assert!(props.tickets.is_empty());
}

fn resolved_footer(content: &EventContent, settings: Option<Value>) -> crate::props::FooterProps {
    let copy = EnglishCopy::new();
    let resolver = Resolver::new(content, &copy);
    match resolver.resolve(&instance("footer", settings)) {
        Some(BlockProps::Footer(props)) => props,
        other => panic!("expected footer props, got {:?}", other),
    }
}

#[test]
fn test_footer_without_settings_shows_samples() {
    let props = resolved_footer(&EventContent::default(), None);

    assert_eq!(props.quick_links.len(), 3);
    assert_eq!(props.quick_links[0].label, "Home");
    assert_eq!(props.social_links.len(), 2);
    assert_eq!(props.copyright, "© Your Event");
}

#[test]
fn test_footer_settings_object_suppresses_absent_links() {
    // The settings object exists, so every link it does not name is
    // deliberately hidden.
    let props = resolved_footer(
        &EventContent::default(),
        Some(json!({ "twitterUrl": "https://twitter.com/devconf" })),
    );

    assert!(props.quick_links.is_empty());
    assert_eq!(props.social_links.len(), 1);
    assert_eq!(props.social_links[0].label, "Twitter");
    assert_eq!(props.social_links[0].url, "https://twitter.com/devconf");
}

#[test]
fn test_footer_explicit_quick_links() {
    let props = resolved_footer(
        &EventContent::default(),
        Some(json!({ "quickLinks": [{ "label": "Venue", "url": "#venue" }] })),
    );

    assert_eq!(props.quick_links.len(), 1);
    assert_eq!(props.quick_links[0].label, "Venue");
}

#[test]
fn test_footer_copyright_derivation() {
    let props = resolved_footer(&content_with_event(), None);
    assert_eq!(props.copyright, "© 2026 DevConf");

    let content = EventContent {
        event: Some(EventRecord {
            name: Some("DevConf".to_string()),
            ..EventRecord::default()
        }),
        ..EventContent::default()
    };
    let props = resolved_footer(&content, None);
    assert_eq!(props.copyright, "© DevConf");
}

#[test]
fn test_malformed_settings_list_falls_through() {
    // A non-array where a list is expected is ignored, not fatal.
    let features = about_features(Some(json!({ "features": "not a list" })));
    assert_eq!(features.len(), 3);

    let features = about_features(Some(json!({ "features": [{"bad": "shape"}] })));
    assert_eq!(features.len(), 3);
}

#[test]
fn test_unknown_copy_keys_echo_instead_of_failing() {
    struct EmptyCopy;
    impl DefaultCopy for EmptyCopy {
        fn text(&self, key: &str) -> String {
            key.to_string()
        }
    }

    let content = EventContent::default();
    let resolver = Resolver::new(&content, &EmptyCopy);
    let props = match resolver.resolve(&instance("hero", None)) {
        Some(BlockProps::Hero(props)) => props,
        other => panic!("expected hero props, got {:?}", other),
    };

    assert_eq!(props.title, "hero.title");
}
