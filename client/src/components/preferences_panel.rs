//! Preferences modal: date format, color scheme and density.
//!
//! Edits a draft copy; only Save writes through the preferences reader, so
//! Cancel leaves the stored value untouched.

#[cfg(test)]
#[path = "preferences_panel_test.rs"]
mod preferences_panel_test;

use chrono::Utc;
use leptos::prelude::*;

use crate::state::preferences::{ColorScheme, DateFormat, Preferences, PreferencesPatch, UiDensity};
use crate::util::date_format::DateFormatter;
use crate::util::preferences::use_preferences;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tile {
    pub value: &'static str,
    pub label: &'static str,
    pub description: String,
}

pub(crate) fn date_format_tiles(sample: chrono::DateTime<Utc>) -> Vec<Tile> {
    DateFormat::ALL
        .into_iter()
        .map(|format| Tile {
            value: format.as_str(),
            label: format.label(),
            description: DateFormatter::from(format).format_date_time(sample),
        })
        .collect()
}

pub(crate) fn color_scheme_tiles() -> Vec<Tile> {
    ColorScheme::ALL
        .into_iter()
        .map(|scheme| Tile { value: scheme.as_str(), label: scheme.label(), description: scheme.description().to_owned() })
        .collect()
}

pub(crate) fn density_tiles() -> Vec<Tile> {
    UiDensity::ALL
        .into_iter()
        .map(|density| Tile { value: density.as_str(), label: density.label(), description: density.description().to_owned() })
        .collect()
}

/// A preference the modal offers tiles for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Group {
    DateFormat,
    ColorScheme,
    UiDensity,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::DateFormat, Group::ColorScheme, Group::UiDensity];

    /// Form field name, matching the stored preferences key.
    pub fn name(self) -> &'static str {
        match self {
            Group::DateFormat => "dateFormat",
            Group::ColorScheme => "colorScheme",
            Group::UiDensity => "uiDensity",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Group::DateFormat => "Date and Time Format",
            Group::ColorScheme => "Color Scheme",
            Group::UiDensity => "Density",
        }
    }

    pub fn tiles(self, sample: chrono::DateTime<Utc>) -> Vec<Tile> {
        match self {
            Group::DateFormat => date_format_tiles(sample),
            Group::ColorScheme => color_scheme_tiles(),
            Group::UiDensity => density_tiles(),
        }
    }

    /// Apply a tile selection to `draft`. Unknown values are ignored.
    pub fn select(self, draft: &mut Preferences, value: &str) {
        match self {
            Group::DateFormat => {
                if let Some(format) = DateFormat::ALL.into_iter().find(|f| f.as_str() == value) {
                    draft.date_format = format;
                }
            }
            Group::ColorScheme => {
                if let Some(scheme) = ColorScheme::ALL.into_iter().find(|s| s.as_str() == value) {
                    draft.color_scheme = scheme;
                }
            }
            Group::UiDensity => {
                if let Some(density) = UiDensity::ALL.into_iter().find(|d| d.as_str() == value) {
                    draft.ui_density = density;
                }
            }
        }
    }

    pub fn selected(self, draft: &Preferences) -> &'static str {
        match self {
            Group::DateFormat => draft.date_format.as_str(),
            Group::ColorScheme => draft.color_scheme.as_str(),
            Group::UiDensity => draft.ui_density.as_str(),
        }
    }
}

/// Modal editing the stored preferences.
#[component]
pub fn PreferencesPanel(on_close: Callback<()>) -> impl IntoView {
    let (prefs, set_prefs) = use_preferences();
    let draft = RwSignal::new(prefs.get_untracked().preferences);
    Effect::new(move |_| draft.set(prefs.get().preferences));

    let sample = Utc::now();

    let on_cancel = move |_| {
        draft.set(prefs.get_untracked().preferences);
        on_close.run(());
    };
    let on_save = move |_| {
        set_prefs(PreferencesPatch::from(draft.get_untracked()));
        on_close.run(());
    };

    view! {
        <div class="preferences-modal__backdrop">
            <div class="preferences-modal" role="dialog" aria-label="Preferences">
                <h2 class="preferences-modal__header">"Preferences"</h2>
                {Group::ALL
                    .into_iter()
                    .map(|group| {
                        view! {
                            <fieldset class="preferences-modal__group">
                                <legend>{group.heading()}</legend>
                                {group
                                    .tiles(sample)
                                    .into_iter()
                                    .map(|tile| {
                                        let value = tile.value;
                                        let checked = move || draft.with(|d| group.selected(d) == value);
                                        let on_change = move |_| draft.update(|d| group.select(d, value));
                                        view! {
                                            <label class="preferences-modal__tile">
                                                <input type="radio" name=group.name() value=value prop:checked=checked on:change=on_change />
                                                <span class="preferences-modal__label">{tile.label}</span>
                                                <span class="preferences-modal__description">{tile.description}</span>
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                            </fieldset>
                        }
                    })
                    .collect_view()}
                <div class="preferences-modal__footer">
                    <button class="preferences-modal__cancel" on:click=on_cancel>"Cancel"</button>
                    <button class="preferences-modal__save" on:click=on_save>"Save"</button>
                </div>
            </div>
        </div>
    }
}
