//! User display preferences.
//!
//! Persisted as one JSON object (`dateFormat`, `colorScheme`, `uiDensity`)
//! with lowercase string tags. Every field may be missing on read.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "system")]
    System,
    #[serde(rename = "iso")]
    Iso8601,
}

impl DateFormat {
    pub const ALL: [Self; 2] = [Self::System, Self::Iso8601];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Iso8601 => "iso",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Iso8601 => "ISO",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    System,
    Light,
    Dark,
}

impl ColorScheme {
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::System => "Use your system default color scheme",
            Self::Light => "Classic light theme",
            Self::Dark => "Classic dark theme",
        }
    }
}

/// Color scheme after resolving [`ColorScheme::System`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectiveColorScheme {
    Light,
    #[default]
    Dark,
}

impl EffectiveColorScheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiDensity {
    #[default]
    Comfortable,
    Compact,
}

impl UiDensity {
    pub const ALL: [Self; 2] = [Self::Comfortable, Self::Compact];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comfortable => "comfortable",
            Self::Compact => "compact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Comfortable => "Comfortable",
            Self::Compact => "Compact",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Comfortable => "Standard spacing",
            Self::Compact => "Reduced spacing",
        }
    }
}

/// Full preference record, as written back to the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub date_format: DateFormat,
    pub color_scheme: ColorScheme,
    pub ui_density: UiDensity,
}

/// Partial update, also the shape of a stored payload on read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<DateFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_density: Option<UiDensity>,
}

impl PreferencesPatch {
    #[must_use]
    pub fn date_format(value: DateFormat) -> Self {
        Self { date_format: Some(value), ..Self::default() }
    }

    #[must_use]
    pub fn color_scheme(value: ColorScheme) -> Self {
        Self { color_scheme: Some(value), ..Self::default() }
    }

    #[must_use]
    pub fn ui_density(value: UiDensity) -> Self {
        Self { ui_density: Some(value), ..Self::default() }
    }
}

impl From<Preferences> for PreferencesPatch {
    fn from(value: Preferences) -> Self {
        Self {
            date_format: Some(value.date_format),
            color_scheme: Some(value.color_scheme),
            ui_density: Some(value.ui_density),
        }
    }
}

impl Preferences {
    /// `patch` fields over `self`.
    #[must_use]
    pub fn merge(self, patch: PreferencesPatch) -> Self {
        Self {
            date_format: patch.date_format.unwrap_or(self.date_format),
            color_scheme: patch.color_scheme.unwrap_or(self.color_scheme),
            ui_density: patch.ui_density.unwrap_or(self.ui_density),
        }
    }

    /// Resolve the system color scheme. `prefers_light` is the host's
    /// `prefers-color-scheme: light` match, `None` when unavailable.
    #[must_use]
    pub fn resolve(self, prefers_light: Option<bool>) -> EffectivePreferences {
        let effective_color_scheme = match self.color_scheme {
            ColorScheme::Light => EffectiveColorScheme::Light,
            ColorScheme::Dark => EffectiveColorScheme::Dark,
            ColorScheme::System if prefers_light == Some(true) => EffectiveColorScheme::Light,
            ColorScheme::System => EffectiveColorScheme::Dark,
        };
        EffectivePreferences { preferences: self, effective_color_scheme }
    }
}

impl From<PreferencesPatch> for Preferences {
    fn from(value: PreferencesPatch) -> Self {
        Self::default().merge(value)
    }
}

/// Preferences plus the resolved color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectivePreferences {
    pub preferences: Preferences,
    pub effective_color_scheme: EffectiveColorScheme,
}
