//! Derived preferences reader.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences live under one store key at `Functionality` consent. This
//! module binds that key, decodes the payload over defaults, resolves the
//! system color scheme and writes merged updates back.
//!
//! ERROR HANDLING
//! ==============
//! A payload that fails to decode is logged and treated as absent, so the UI
//! always renders with usable preferences. Without consent the reader sees
//! defaults and updates are dropped by the store.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use leptos::prelude::*;

use crate::state::consent::ConsentLevel;
use crate::state::listeners::Subscription;
use crate::state::preferences::{EffectivePreferences, Preferences, PreferencesPatch};
use crate::state::store::{Binding, ConsentStore, StoreContext};
use crate::util::theme;

pub const PREFERENCES_KEY: &str = "PREFERENCES";
pub const PREFERENCES_LEVEL: ConsentLevel = ConsentLevel::Functionality;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid preferences payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a stored payload, defaulting missing fields.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] when `raw` is not a preferences object or
/// carries an unknown tag.
pub fn decode(raw: &str) -> Result<Preferences, DecodeError> {
    let patch: PreferencesPatch = serde_json::from_str(raw)?;
    Ok(patch.into())
}

/// Decode `raw`, falling back to defaults when absent or undecodable.
pub fn decode_or_default(raw: Option<&str>) -> Preferences {
    let Some(raw) = raw else {
        return Preferences::default();
    };
    decode(raw).unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; using default preferences");
        Preferences::default()
    })
}

/// Preferences bound to a store.
#[derive(Clone, Debug)]
pub struct PreferencesReader<S> {
    binding: Binding<S>,
}

impl<S: ConsentStore + Clone> PreferencesReader<S> {
    pub fn new(store: &S) -> Self {
        Self { binding: store.bind(PREFERENCES_KEY, PREFERENCES_LEVEL) }
    }

    /// Stored preferences over defaults.
    pub fn stored(&self) -> Preferences {
        decode_or_default(self.binding.value().as_deref())
    }

    pub fn effective(&self, prefers_light: Option<bool>) -> EffectivePreferences {
        self.stored().resolve(prefers_light)
    }

    /// Merge `patch` over the current values and write the full record.
    pub fn update(&self, patch: PreferencesPatch) {
        let next = self.stored().merge(patch);
        match serde_json::to_string(&next) {
            Ok(raw) => self.binding.set(&raw),
            Err(e) => leptos::logging::warn!("failed to encode preferences: {e}"),
        }
    }

    /// Called with freshly decoded preferences after every change to the key.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Preferences) + Send + Sync + 'static,
    {
        self.binding.subscribe(move |raw| callback(decode_or_default(raw.as_deref())))
    }
}

/// Effective preferences from the [`StoreContext`] in context, plus a setter
/// that merges a partial update.
pub fn use_preferences() -> (Signal<EffectivePreferences>, impl Fn(PreferencesPatch) + Clone + Send + Sync + 'static) {
    let store = expect_context::<StoreContext>();
    let reader = PreferencesReader::new(&store);

    let stored = RwSignal::new(reader.stored());
    let subscription = reader.subscribe(move |prefs| {
        let _ = stored.try_set(prefs);
    });
    on_cleanup(move || drop(subscription));

    let prefers_light = theme::prefers_light_scheme();
    let effective = Signal::derive(move || stored.get().resolve(prefers_light));
    (effective, move |patch| reader.update(patch))
}
