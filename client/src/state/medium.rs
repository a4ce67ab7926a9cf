//! Key/value mediums the consent-gated store writes through to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes `localStorage` (durable) and `sessionStorage` (tab
//! lifetime). Both sit behind [`StorageMedium`] so the store can be tested
//! and server-rendered against [`MemoryMedium`] without `web-sys`.
//!
//! TRADE-OFFS
//! ==========
//! [`WebStorage`] resolves the `Storage` object on every call instead of
//! holding it, which keeps the medium `Send + Sync` for Leptos contexts at
//! the cost of a `window()` lookup per access. Browser failures (quota,
//! disabled storage) are swallowed: reads come back absent, writes drop.

#[cfg(test)]
#[path = "medium_test.rs"]
mod medium_test;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::listeners::lock;

/// Raw string storage wrapped by [`super::store::BrowserStore`].
pub trait StorageMedium: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
    /// Release medium resources. Called at most once by the owning store.
    fn close(&self) {}
}

/// In-process medium backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    items: Mutex<HashMap<String, String>>,
    closed: AtomicBool,
}

impl MemoryMedium {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`StorageMedium::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageMedium for MemoryMedium {
    fn get_item(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        lock(&self.items).insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        lock(&self.items).remove(key);
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Browser Web Storage area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebStorage {
    Local,
    Session,
}

#[cfg(feature = "hydrate")]
impl WebStorage {
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            Self::Local => window.local_storage().ok().flatten(),
            Self::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl StorageMedium for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = self.storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("web storage rejected write: key={key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
