//! Derived computations: popular-ticket tie-break, durations, day
//! grouping, price labels.

use crate::content::{EventContent, SessionRecord, Ticket};
use crate::locale::EnglishCopy;
use crate::props::BlockProps;
use crate::resolve::{day_tabs, Resolver};
use pagestudio_document::BlockInstance;
use serde_json::json;

fn ticket(price: serde_json::Value) -> Ticket {
    Ticket {
        name: Some("T".to_string()),
        price: Some(price),
        ..Ticket::default()
    }
}

fn resolve_tickets(tickets: Vec<Ticket>) -> Vec<crate::props::TicketProps> {
    let copy = EnglishCopy::new();
    let content = EventContent {
        tickets: Some(tickets),
        ..EventContent::default()
    };
    let resolver = Resolver::new(&content, &copy);
    match resolver.resolve(&BlockInstance::new("tickets", 0)) {
        Some(BlockProps::Tickets(props)) => props.tickets,
        other => panic!("expected tickets props, got {:?}", other),
    }
}

#[test]
fn test_popular_tie_break_prefers_first_top_price() {
    let tickets = resolve_tickets(vec![
        ticket(json!("$50")),
        ticket(json!("$100")),
        ticket(json!("$100")),
    ]);

    let popular: Vec<bool> = tickets.iter().map(|t| t.popular).collect();
    assert_eq!(popular, vec![false, true, false]);
}

#[test]
fn test_explicit_popular_flags_win_over_price() {
    let mut cheap = ticket(json!(10));
    cheap.popular = Some(true);
    let tickets = resolve_tickets(vec![cheap, ticket(json!(500))]);

    let popular: Vec<bool> = tickets.iter().map(|t| t.popular).collect();
    assert_eq!(popular, vec![true, false]);
}

#[test]
fn test_no_priced_tickets_means_no_popular() {
    let tickets = resolve_tickets(vec![Ticket::default(), ticket(json!("Donation"))]);
    assert!(tickets.iter().all(|t| !t.popular));
}

#[test]
fn test_price_labels() {
    let tickets = resolve_tickets(vec![
        ticket(json!("$50")),
        ticket(json!(149)),
        ticket(json!(49.5)),
        ticket(json!("Donation")),
        Ticket::default(),
    ]);

    let labels: Vec<&str> = tickets.iter().map(|t| t.price_label.as_str()).collect();
    assert_eq!(labels, vec!["$50", "$149", "$49.50", "Free", "Free"]);
}

fn session(day: Option<u32>, starts: Option<&str>, ends: Option<&str>) -> SessionRecord {
    SessionRecord {
        title: Some("Talk".to_string()),
        starts_at: starts.map(str::to_string),
        ends_at: ends.map(str::to_string),
        day,
        ..SessionRecord::default()
    }
}

fn resolve_agenda(sessions: Vec<SessionRecord>) -> crate::props::AgendaProps {
    let copy = EnglishCopy::new();
    let content = EventContent {
        sessions: Some(sessions),
        ..EventContent::default()
    };
    let resolver = Resolver::new(&content, &copy);
    match resolver.resolve(&BlockInstance::new("agenda", 0)) {
        Some(BlockProps::Agenda(props)) => props,
        other => panic!("expected agenda props, got {:?}", other),
    }
}

#[test]
fn test_sessions_group_by_day_with_default_day_one() {
    let agenda = resolve_agenda(vec![
        session(Some(2), Some("2026-06-13T09:00:00Z"), None),
        session(None, Some("2026-06-12T09:00:00Z"), None),
        session(Some(2), Some("2026-06-13T11:00:00Z"), None),
    ]);

    assert_eq!(agenda.days.len(), 2);
    assert_eq!(agenda.days[0].day, 1);
    assert_eq!(agenda.days[0].sessions.len(), 1);
    assert_eq!(agenda.days[1].day, 2);
    assert_eq!(agenda.days[1].sessions.len(), 2);
}

#[test]
fn test_day_labels_use_representative_date() {
    let agenda = resolve_agenda(vec![
        session(Some(1), None, None),
        session(Some(2), Some("2026-06-13T09:00:00Z"), None),
    ]);

    assert_eq!(agenda.days[0].label, "Day 1");
    assert_eq!(agenda.days[1].label, "Day 2 – June 13, 2026");
}

#[test]
fn test_zero_minute_session_shows_placeholder_not_zero() {
    let agenda = resolve_agenda(vec![session(
        None,
        Some("2026-06-12T10:00:00Z"),
        Some("2026-06-12T10:00:00Z"),
    )]);

    let label = &agenda.days[0].sessions[0].duration_label;
    assert_eq!(label, "TBA");
}

#[test]
fn test_session_duration_and_time_labels() {
    let agenda = resolve_agenda(vec![session(
        None,
        Some("2026-06-12T09:00:00Z"),
        Some("2026-06-12T09:45:00Z"),
    )]);

    let props = &agenda.days[0].sessions[0];
    assert_eq!(props.time_label, "9:00 AM");
    assert_eq!(props.duration_label, "45 min");
}

#[test]
fn test_invalid_session_timestamps_degrade() {
    let agenda = resolve_agenda(vec![session(None, Some("garbage"), Some("also garbage"))]);

    let props = &agenda.days[0].sessions[0];
    assert_eq!(props.time_label, "");
    assert_eq!(props.duration_label, "TBA");
}

#[test]
fn test_day_tabs_match_agenda_grouping() {
    let sessions = vec![
        session(Some(2), Some("2026-06-13T09:00:00Z"), None),
        session(None, None, None),
    ];

    let tabs = day_tabs(&sessions);
    let agenda = resolve_agenda(sessions);

    let from_tabs: Vec<(u32, String)> = tabs.into_iter().map(|t| (t.day, t.label)).collect();
    let from_agenda: Vec<(u32, String)> = agenda
        .days
        .into_iter()
        .map(|d| (d.day, d.label))
        .collect();
    assert_eq!(from_tabs, from_agenda);
}
