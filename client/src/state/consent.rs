//! Consent levels that gate client-side persistence.
//!
//! `StrictlyNecessary` is always implicitly granted; every other level must
//! be granted explicitly before keys that require it can be read or written.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Ordered consent categories, least to most invasive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ConsentLevel {
    StrictlyNecessary,
    Functionality,
    Performance,
    Targeting,
}

/// Consent set granted by the application once the durable store is active.
pub const DEFAULT_CONSENT: [ConsentLevel; 2] = [ConsentLevel::StrictlyNecessary, ConsentLevel::Functionality];

/// Set of consent levels currently granted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsentSet {
    levels: BTreeSet<ConsentLevel>,
}

impl ConsentSet {
    #[must_use]
    pub fn new(levels: impl IntoIterator<Item = ConsentLevel>) -> Self {
        Self { levels: levels.into_iter().collect() }
    }

    /// Whether `level` is granted. `StrictlyNecessary` always is.
    #[must_use]
    pub fn allows(&self, level: ConsentLevel) -> bool {
        level == ConsentLevel::StrictlyNecessary || self.levels.contains(&level)
    }

    /// Levels whose effective grant differs between `self` and `other`.
    #[must_use]
    pub fn transitions(&self, other: &ConsentSet) -> BTreeSet<ConsentLevel> {
        self.levels
            .symmetric_difference(&other.levels)
            .copied()
            .filter(|level| *level != ConsentLevel::StrictlyNecessary)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = ConsentLevel> + '_ {
        self.levels.iter().copied()
    }
}

impl FromIterator<ConsentLevel> for ConsentSet {
    fn from_iter<I: IntoIterator<Item = ConsentLevel>>(iter: I) -> Self {
        Self::new(iter)
    }
}
