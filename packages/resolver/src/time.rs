//! Deterministic date, duration, and price derivations.
//!
//! These never fail: invalid or missing input yields an empty string or
//! the caller's placeholder.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Parse the timestamp shapes the backend emits: RFC 3339, a bare
/// datetime, or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}

/// "June 12, 2026"; empty string for missing or invalid input.
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// "9:00 AM"; empty string for missing or invalid input.
pub fn format_time(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Whole minutes between two timestamps, rounded. `None` when either
/// side is missing or invalid, or the result rounds to zero or less.
pub fn duration_minutes(start: Option<&str>, end: Option<&str>) -> Option<i64> {
    let start = start.and_then(parse_timestamp)?;
    let end = end.and_then(parse_timestamp)?;
    let minutes = ((end - start).num_seconds() as f64 / 60.0).round() as i64;
    (minutes > 0).then_some(minutes)
}

/// "45 min", or the placeholder when no usable duration exists. A
/// zero-minute session gets the placeholder, never "0 min".
pub fn duration_label(start: Option<&str>, end: Option<&str>, placeholder: &str) -> String {
    match duration_minutes(start, end) {
        Some(minutes) => format!("{} min", minutes),
        None => placeholder.to_string(),
    }
}

/// "Day 2", or "Day 2 – June 13, 2026" when a representative date is
/// resolvable for that day.
pub fn day_label(day: u32, representative: Option<&str>) -> String {
    let date = format_date(representative);
    if date.is_empty() {
        format!("Day {}", day)
    } else {
        format!("Day {} – {}", day, date)
    }
}

/// Currency label for a numeric amount: "$49" or "$49.50".
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount as i64)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(
            format_date(Some("2026-06-12T09:00:00Z")),
            "June 12, 2026"
        );
        assert_eq!(format_date(Some("2026-06-12")), "June 12, 2026");
        assert_eq!(format_date(Some("not a date")), "");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some("2026-06-12T09:00:00Z")), "9:00 AM");
        assert_eq!(format_time(Some("2026-06-12T14:30:00Z")), "2:30 PM");
        assert_eq!(format_time(Some("garbage")), "");
    }

    #[test]
    fn test_duration_rounds_to_minutes() {
        assert_eq!(
            duration_minutes(Some("2026-06-12T09:00:00Z"), Some("2026-06-12T09:45:29Z")),
            Some(45)
        );
        assert_eq!(
            duration_minutes(Some("2026-06-12T09:00:00Z"), Some("2026-06-12T09:45:31Z")),
            Some(46)
        );
    }

    #[test]
    fn test_zero_duration_gets_placeholder() {
        let label = duration_label(
            Some("2026-06-12T10:00:00Z"),
            Some("2026-06-12T10:00:00Z"),
            "TBA",
        );
        assert_eq!(label, "TBA");
    }

    #[test]
    fn test_missing_or_backward_duration_gets_placeholder() {
        assert_eq!(duration_label(None, Some("2026-06-12T10:00:00Z"), "TBA"), "TBA");
        assert_eq!(
            duration_label(Some("2026-06-12T11:00:00Z"), Some("2026-06-12T10:00:00Z"), "TBA"),
            "TBA"
        );
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(1, None), "Day 1");
        assert_eq!(day_label(1, Some("bad date")), "Day 1");
        assert_eq!(
            day_label(2, Some("2026-06-13T09:00:00Z")),
            "Day 2 – June 13, 2026"
        );
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(49.0), "$49");
        assert_eq!(format_amount(49.5), "$49.50");
    }
}
