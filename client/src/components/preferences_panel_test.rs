use super::*;
use chrono::TimeZone;

// =============================================================
// tiles
// =============================================================

#[test]
fn date_format_tiles_preview_both_renderers() {
    let sample = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
    let tiles = date_format_tiles(sample);
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[1].value, "iso");
    assert_eq!(tiles[1].label, "ISO");
    assert_eq!(tiles[1].description, "2024-03-07T09:05:02.000Z");
}

#[test]
fn tile_values_match_stored_tags() {
    let schemes: Vec<&str> = color_scheme_tiles().iter().map(|t| t.value).collect();
    assert_eq!(schemes, vec!["system", "light", "dark"]);
    let densities: Vec<&str> = density_tiles().iter().map(|t| t.value).collect();
    assert_eq!(densities, vec!["comfortable", "compact"]);
}

// =============================================================
// select
// =============================================================

#[test]
fn select_updates_matching_group_only() {
    let mut draft = Preferences::default();
    Group::ColorScheme.select(&mut draft, "light");
    Group::UiDensity.select(&mut draft, "compact");
    assert_eq!(
        draft,
        Preferences { date_format: DateFormat::System, color_scheme: ColorScheme::Light, ui_density: UiDensity::Compact }
    );
    assert_eq!(Group::ColorScheme.selected(&draft), "light");
    assert_eq!(Group::DateFormat.selected(&draft), "system");
}

#[test]
fn select_ignores_unknown_values() {
    let mut draft = Preferences::default();
    Group::DateFormat.select(&mut draft, "roman");
    Group::UiDensity.select(&mut draft, "light");
    assert_eq!(draft, Preferences::default());
}

#[test]
fn each_group_reads_back_its_own_field() {
    let draft = Preferences { date_format: DateFormat::Iso8601, color_scheme: ColorScheme::Dark, ui_density: UiDensity::Compact };
    let selected: Vec<&str> = Group::ALL.into_iter().map(|group| group.selected(&draft)).collect();
    assert_eq!(selected, vec!["iso", "dark", "compact"]);
}

#[test]
fn group_tiles_offer_the_selected_value() {
    let sample = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
    let draft = Preferences::default();
    for group in Group::ALL {
        let tiles = group.tiles(sample);
        assert!(tiles.iter().any(|tile| tile.value == group.selected(&draft)), "{}", group.name());
    }
}
