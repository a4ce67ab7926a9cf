//! Identity sources for notification messages.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces message ids. Ids must not repeat for the lifetime of a source.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs prefixed with `n`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        format!("n{}", uuid::Uuid::new_v4())
    }
}

/// Monotonic counter ids (`n1`, `n2`, ...). Deterministic, for tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("n{n}")
    }
}
