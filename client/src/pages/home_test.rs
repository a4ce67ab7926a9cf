use super::*;
use chrono::TimeZone;

#[test]
fn opened_label_is_empty_before_the_browser_stamps_it() {
    assert_eq!(opened_label(None, DateFormatter::Iso8601), "");
    assert_eq!(opened_label(None, DateFormatter::System), "");
}

#[test]
fn opened_label_formats_with_the_chosen_renderer() {
    let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
    assert_eq!(opened_label(Some(at), DateFormatter::Iso8601), "2024-03-07T09:05:02.000Z");
}
