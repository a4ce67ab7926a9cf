//! Date and time rendering per the user's date format preference.
//!
//! `Iso8601` output matches JavaScript's `toISOString` (UTC, millisecond
//! precision). `System` uses the browser locale when hydrated and chrono's
//! locale-neutral `%x`/`%X`/`%c` renderings elsewhere.

#[cfg(test)]
#[path = "date_format_test.rs"]
mod date_format_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::state::preferences::DateFormat;
use crate::util::preferences::use_preferences;

const ISO_DATE: &str = "%Y-%m-%d";
const ISO_TIME: &str = "%H:%M:%S%.3fZ";
const ISO_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Renderer selected by [`DateFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFormatter {
    System,
    Iso8601,
}

impl From<DateFormat> for DateFormatter {
    fn from(value: DateFormat) -> Self {
        match value {
            DateFormat::System => Self::System,
            DateFormat::Iso8601 => Self::Iso8601,
        }
    }
}

impl DateFormatter {
    #[must_use]
    pub fn format_date(self, at: DateTime<Utc>) -> String {
        match self {
            Self::Iso8601 => at.format(ISO_DATE).to_string(),
            Self::System => system::date(at),
        }
    }

    #[must_use]
    pub fn format_time(self, at: DateTime<Utc>) -> String {
        match self {
            Self::Iso8601 => at.format(ISO_TIME).to_string(),
            Self::System => system::time(at),
        }
    }

    #[must_use]
    pub fn format_date_time(self, at: DateTime<Utc>) -> String {
        match self {
            Self::Iso8601 => at.format(ISO_DATE_TIME).to_string(),
            Self::System => system::date_time(at),
        }
    }

    /// Like [`DateFormatter::format_date_time`] for an RFC 3339 string.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `raw` is not RFC 3339.
    pub fn format_date_time_str(self, raw: &str) -> Result<String, chrono::ParseError> {
        Ok(self.format_date_time(parse_timestamp(raw)?))
    }
}

/// Parse an RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns the parse error when `raw` is not RFC 3339.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|at| at.with_timezone(&Utc))
}

/// Formatter following the stored date format preference.
pub fn use_date_format() -> Signal<DateFormatter> {
    let (prefs, _) = use_preferences();
    Signal::derive(move || DateFormatter::from(prefs.get().preferences.date_format))
}

#[cfg(feature = "hydrate")]
mod system {
    use chrono::{DateTime, Utc};
    use wasm_bindgen::JsValue;

    #[allow(clippy::cast_precision_loss)]
    fn js_date(at: DateTime<Utc>) -> js_sys::Date {
        js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64))
    }

    fn locale() -> String {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| "en-US".to_owned())
    }

    pub(super) fn date(at: DateTime<Utc>) -> String {
        js_date(at).to_locale_date_string(&locale(), &JsValue::UNDEFINED).into()
    }

    pub(super) fn time(at: DateTime<Utc>) -> String {
        js_date(at).to_locale_time_string(&locale()).into()
    }

    pub(super) fn date_time(at: DateTime<Utc>) -> String {
        js_date(at).to_locale_string(&locale(), &JsValue::UNDEFINED).into()
    }
}

#[cfg(not(feature = "hydrate"))]
mod system {
    use chrono::{DateTime, Utc};

    pub(super) fn date(at: DateTime<Utc>) -> String {
        at.format("%x").to_string()
    }

    pub(super) fn time(at: DateTime<Utc>) -> String {
        at.format("%X").to_string()
    }

    pub(super) fn date_time(at: DateTime<Utc>) -> String {
        at.format("%c").to_string()
    }
}
