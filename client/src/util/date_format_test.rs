use super::*;
use chrono::TimeZone;

fn sample() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap() + chrono::Duration::milliseconds(45)
}

// =============================================================
// ISO 8601
// =============================================================

#[test]
fn iso_matches_to_iso_string_layout() {
    let f = DateFormatter::Iso8601;
    assert_eq!(f.format_date(sample()), "2024-03-07");
    assert_eq!(f.format_time(sample()), "09:05:02.045Z");
    assert_eq!(f.format_date_time(sample()), "2024-03-07T09:05:02.045Z");
}

#[test]
fn iso_date_time_is_date_and_time_joined() {
    let f = DateFormatter::Iso8601;
    let joined = format!("{}T{}", f.format_date(sample()), f.format_time(sample()));
    assert_eq!(f.format_date_time(sample()), joined);
}

#[test]
fn string_input_is_normalized_to_utc() {
    let f = DateFormatter::Iso8601;
    assert_eq!(f.format_date_time_str("2024-03-07T11:05:02.045+02:00").unwrap(), "2024-03-07T09:05:02.045Z");
    assert!(f.format_date_time_str("yesterday").is_err());
}

// =============================================================
// System
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn system_uses_locale_neutral_renderings() {
    let f = DateFormatter::System;
    assert_eq!(f.format_date(sample()), "03/07/24");
    assert_eq!(f.format_time(sample()), "09:05:02");
    assert_eq!(f.format_date_time(sample()), "Thu Mar  7 09:05:02 2024");
}

#[test]
fn formatter_follows_preference() {
    assert_eq!(DateFormatter::from(DateFormat::System), DateFormatter::System);
    assert_eq!(DateFormatter::from(DateFormat::Iso8601), DateFormatter::Iso8601);
}
