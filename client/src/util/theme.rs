//! Theme and density application.
//!
//! Writes `data-theme` and `data-density` on the `<html>` element from the
//! effective preferences, and reads the host's `prefers-color-scheme`
//! signal. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op and report no host signal, so server markup always
//! renders with the dark fallback until hydration applies the real theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::preferences::EffectivePreferences;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DENSITY_ATTRIBUTE: &str = "data-density";

/// Whether the host prefers a light color scheme. `None` outside a browser.
pub fn prefers_light_scheme() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?
            .match_media("(prefers-color-scheme: light)")
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Attribute name/value pairs for `prefs`.
pub fn attributes(prefs: &EffectivePreferences) -> [(&'static str, &'static str); 2] {
    [
        (THEME_ATTRIBUTE, prefs.effective_color_scheme.as_str()),
        (DENSITY_ATTRIBUTE, prefs.preferences.ui_density.as_str()),
    ]
}

/// Apply the theme attributes on the `<html>` element.
pub fn apply(prefs: &EffectivePreferences) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                for (name, value) in attributes(prefs) {
                    let _ = el.set_attribute(name, value);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}
