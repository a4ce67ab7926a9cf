#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::preferences::{ColorScheme, Preferences, UiDensity};

#[test]
fn no_host_signal_in_non_hydrate_tests() {
    assert_eq!(prefers_light_scheme(), None);
}

#[test]
fn attributes_follow_effective_preferences() {
    let prefs = Preferences { color_scheme: ColorScheme::Light, ui_density: UiDensity::Compact, ..Preferences::default() }
        .resolve(None);
    assert_eq!(attributes(&prefs), [("data-theme", "light"), ("data-density", "compact")]);
}

#[test]
fn system_scheme_without_signal_renders_dark() {
    let prefs = Preferences::default().resolve(prefers_light_scheme());
    assert_eq!(attributes(&prefs), [("data-theme", "dark"), ("data-density", "comfortable")]);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(&Preferences::default().resolve(None));
}
