use super::*;
use crate::state::medium::MemoryMedium;
use crate::state::preferences::{ColorScheme, DateFormat, EffectiveColorScheme, UiDensity};
use crate::state::store::BrowserStore;
use std::sync::{Arc, Mutex};

fn consented_store() -> BrowserStore {
    let store = BrowserStore::durable(Arc::new(MemoryMedium::new()));
    store.set_consent_levels([ConsentLevel::StrictlyNecessary, ConsentLevel::Functionality]);
    store
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_defaults_missing_fields() {
    let prefs = decode(r#"{"uiDensity":"compact"}"#).unwrap();
    assert_eq!(prefs, Preferences { ui_density: UiDensity::Compact, ..Preferences::default() });
}

#[test]
fn decode_rejects_corrupt_payload() {
    let err = decode("{not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid preferences payload"));
}

#[test]
fn decode_or_default_falls_back() {
    assert_eq!(decode_or_default(None), Preferences::default());
    assert_eq!(decode_or_default(Some("[1, 2]")), Preferences::default());
    assert_eq!(decode_or_default(Some(r#"{"colorScheme":"purple"}"#)), Preferences::default());
}

// =============================================================
// reader
// =============================================================

#[test]
fn update_then_read_round_trips() {
    let store = consented_store();
    let reader = PreferencesReader::new(&store);
    let wanted = Preferences {
        date_format: DateFormat::Iso8601,
        color_scheme: ColorScheme::Light,
        ui_density: UiDensity::Compact,
    };

    reader.update(wanted.into());
    assert_eq!(reader.stored(), wanted);

    let raw = store.read(PREFERENCES_KEY, PREFERENCES_LEVEL).unwrap();
    assert_eq!(decode(&raw).unwrap(), wanted);
}

#[test]
fn update_merges_over_current_values() {
    let store = consented_store();
    let reader = PreferencesReader::new(&store);
    reader.update(PreferencesPatch::date_format(DateFormat::Iso8601));
    reader.update(PreferencesPatch::ui_density(UiDensity::Compact));

    let raw = store.read(PREFERENCES_KEY, PREFERENCES_LEVEL).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"dateFormat": "iso", "colorScheme": "system", "uiDensity": "compact"})
    );
}

#[test]
fn update_overwrites_corrupt_payload() {
    let store = consented_store();
    store.write(PREFERENCES_KEY, PREFERENCES_LEVEL, "garbage");
    let reader = PreferencesReader::new(&store);
    assert_eq!(reader.stored(), Preferences::default());

    reader.update(PreferencesPatch::color_scheme(ColorScheme::Dark));
    assert_eq!(reader.stored().color_scheme, ColorScheme::Dark);
}

#[test]
fn without_consent_reader_sees_defaults_and_drops_updates() {
    let store = BrowserStore::durable(Arc::new(MemoryMedium::new()));
    let reader = PreferencesReader::new(&store);

    reader.update(PreferencesPatch::color_scheme(ColorScheme::Light));
    assert_eq!(reader.stored(), Preferences::default());
    assert!(store.read(PREFERENCES_KEY, PREFERENCES_LEVEL).is_none());
}

#[test]
fn effective_resolves_system_scheme() {
    let store = consented_store();
    let reader = PreferencesReader::new(&store);
    assert_eq!(reader.effective(Some(true)).effective_color_scheme, EffectiveColorScheme::Light);
    assert_eq!(reader.effective(None).effective_color_scheme, EffectiveColorScheme::Dark);

    reader.update(PreferencesPatch::color_scheme(ColorScheme::Dark));
    assert_eq!(reader.effective(Some(true)).effective_color_scheme, EffectiveColorScheme::Dark);
}

#[test]
fn subscribe_delivers_decoded_preferences() {
    let store = consented_store();
    let reader = PreferencesReader::new(&store);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = reader.subscribe(move |prefs| sink.lock().unwrap().push(prefs.ui_density));

    reader.update(PreferencesPatch::ui_density(UiDensity::Compact));
    store.set_consent_levels([ConsentLevel::StrictlyNecessary]);

    assert_eq!(*seen.lock().unwrap(), vec![UiDensity::Compact, UiDensity::Comfortable]);
}
