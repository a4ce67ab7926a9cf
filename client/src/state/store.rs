//! Consent-gated key/value store and the active-store slot.
//!
//! DESIGN
//! ======
//! `BrowserStore` wraps one [`StorageMedium`] and refuses to touch any key
//! whose required [`ConsentLevel`] is not granted: reads come back absent and
//! writes are dropped, silently. Values are opaque strings; callers own the
//! encoding.
//!
//! `StoreContext` holds the store the rest of the UI talks to. The app
//! starts on a session-scoped default store and swaps in the durable store
//! once consent is configured; the swap re-derives every live subscription
//! so nothing keeps showing a value from the old medium.
//!
//! Both types are cheap `Clone` handles and notify listeners synchronously,
//! after the committed change and outside any internal lock.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use super::consent::{ConsentLevel, ConsentSet};
use super::listeners::{Listeners, Subscription, lock};
use super::medium::{StorageMedium, WebStorage};

// =============================================================================
// CONTRACT
// =============================================================================

/// Store-wide change notification, used to relay changes across store swaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// A value was committed (written or removed) under `key`.
    Written { key: String },
    /// The effective grant of `levels` flipped.
    ConsentChanged { levels: BTreeSet<ConsentLevel> },
}

/// Read/write/subscribe surface shared by [`BrowserStore`] and [`StoreContext`].
pub trait ConsentStore: Send + Sync {
    /// Stored value for `key`, or `None` when consent for `level` is missing
    /// or no entry exists.
    fn read(&self, key: &str, level: ConsentLevel) -> Option<String>;

    /// Write through to the medium. No-op without consent for `level`.
    fn write(&self, key: &str, level: ConsentLevel, value: &str);

    /// Remove `key` from the medium. No-op without consent for `level`.
    fn remove(&self, key: &str, level: ConsentLevel);

    /// Invoke `callback` with the re-derived value after every committed
    /// write to `key` and every consent change affecting `level`.
    fn subscribe<F>(&self, key: &str, level: ConsentLevel, callback: F) -> Subscription
    where
        F: Fn(Option<String>) + Send + Sync + 'static;

    /// Pair `key` with a reader and a setter bound to this store.
    fn bind(&self, key: &str, level: ConsentLevel) -> Binding<Self>
    where
        Self: Clone + Sized,
    {
        Binding { store: self.clone(), key: key.to_owned(), level }
    }
}

/// A key bound to a store at a fixed consent level.
///
/// [`Binding::value`] re-reads on every call, so it always reflects the
/// latest committed write, consent state and (through [`StoreContext`]) the
/// currently active medium.
#[derive(Clone, Debug)]
pub struct Binding<S> {
    store: S,
    key: String,
    level: ConsentLevel,
}

impl<S: ConsentStore> Binding<S> {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn level(&self) -> ConsentLevel {
        self.level
    }

    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.store.read(&self.key, self.level)
    }

    pub fn set(&self, value: &str) {
        self.store.write(&self.key, self.level, value);
    }

    pub fn clear(&self) {
        self.store.remove(&self.key, self.level);
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<String>) + Send + Sync + 'static,
    {
        self.store.subscribe(&self.key, self.level, callback)
    }
}

struct KeyListener {
    key: String,
    level: ConsentLevel,
    callback: Box<dyn Fn(Option<String>) + Send + Sync>,
}

type EventListener = dyn Fn(&StoreEvent) + Send + Sync;

fn notify_key(listeners: &Listeners<KeyListener>, key: &str, read: impl Fn(&str, ConsentLevel) -> Option<String>) {
    for listener in listeners.snapshot() {
        if listener.key == key {
            (listener.callback)(read(&listener.key, listener.level));
        }
    }
}

fn notify_levels(
    listeners: &Listeners<KeyListener>,
    levels: &BTreeSet<ConsentLevel>,
    read: impl Fn(&str, ConsentLevel) -> Option<String>,
) {
    for listener in listeners.snapshot() {
        if levels.contains(&listener.level) {
            (listener.callback)(read(&listener.key, listener.level));
        }
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// Construction flags for [`BrowserStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Skip `StorageMedium::close` on [`BrowserStore::close`]. Set for
    /// ephemeral default stores that do not own their medium.
    pub ignore_close: bool,
    /// Make [`BrowserStore::has_consent`] report `true` for every level.
    /// Does not open the read/write gate.
    pub always_granted: bool,
}

/// Consent-gated wrapper around one storage medium.
#[derive(Clone)]
pub struct BrowserStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    medium: Arc<dyn StorageMedium>,
    config: StoreConfig,
    consent: Mutex<ConsentSet>,
    keyed: Listeners<KeyListener>,
    events: Listeners<EventListener>,
    closed: AtomicBool,
}

impl BrowserStore {
    #[must_use]
    pub fn new(medium: Arc<dyn StorageMedium>, config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                medium,
                config,
                consent: Mutex::new(ConsentSet::default()),
                keyed: Listeners::new(),
                events: Listeners::new(),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Session-scoped store used before consent is known.
    #[must_use]
    pub fn session_default() -> Self {
        Self::new(Arc::new(WebStorage::Session), StoreConfig { ignore_close: true, always_granted: true })
    }

    /// Store over a caller-supplied durable medium that it owns and closes.
    #[must_use]
    pub fn durable(medium: Arc<dyn StorageMedium>) -> Self {
        Self::new(medium, StoreConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> StoreConfig {
        self.inner.config
    }

    /// Whether both handles point at the same store.
    #[must_use]
    pub fn same_store(&self, other: &BrowserStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Replace the granted set atomically and re-derive subscribers whose
    /// level flipped.
    pub fn set_consent_levels(&self, levels: impl IntoIterator<Item = ConsentLevel>) {
        let next = ConsentSet::new(levels);
        let changed = {
            let mut consent = lock(&self.inner.consent);
            let changed = consent.transitions(&next);
            *consent = next;
            changed
        };
        if changed.is_empty() {
            return;
        }

        leptos::logging::log!("store consent changed: levels={changed:?}");
        notify_levels(&self.inner.keyed, &changed, |key, level| self.read(key, level));
        let event = StoreEvent::ConsentChanged { levels: changed };
        for listener in self.inner.events.snapshot() {
            listener(&event);
        }
    }

    /// Currently granted levels (`StrictlyNecessary` implied, not listed).
    #[must_use]
    pub fn consent_levels(&self) -> ConsentSet {
        lock(&self.inner.consent).clone()
    }

    /// Outward-facing consent predicate.
    #[must_use]
    pub fn has_consent(&self, level: ConsentLevel) -> bool {
        self.inner.config.always_granted || self.gate_open(level)
    }

    fn gate_open(&self, level: ConsentLevel) -> bool {
        lock(&self.inner.consent).allows(level)
    }

    /// Observe every committed write and consent change on this store.
    pub fn watch<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.inner.events.insert(Arc::new(callback))
    }

    fn committed(&self, key: &str) {
        notify_key(&self.inner.keyed, key, |key, level| self.read(key, level));
        let event = StoreEvent::Written { key: key.to_owned() };
        for listener in self.inner.events.snapshot() {
            listener(&event);
        }
    }

    /// Release the medium unless `ignore_close` is set. Idempotent.
    pub fn close(&self) {
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        if !self.inner.config.ignore_close {
            self.inner.medium.close();
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }
}

impl ConsentStore for BrowserStore {
    fn read(&self, key: &str, level: ConsentLevel) -> Option<String> {
        if !self.gate_open(level) {
            return None;
        }
        self.inner.medium.get_item(key)
    }

    fn write(&self, key: &str, level: ConsentLevel, value: &str) {
        if !self.gate_open(level) {
            return;
        }
        self.inner.medium.set_item(key, value);
        self.committed(key);
    }

    fn remove(&self, key: &str, level: ConsentLevel) {
        if !self.gate_open(level) {
            return;
        }
        self.inner.medium.remove_item(key);
        self.committed(key);
    }

    fn subscribe<F>(&self, key: &str, level: ConsentLevel, callback: F) -> Subscription
    where
        F: Fn(Option<String>) + Send + Sync + 'static,
    {
        self.inner
            .keyed
            .insert(Arc::new(KeyListener { key: key.to_owned(), level, callback: Box::new(callback) }))
    }
}

impl std::fmt::Debug for BrowserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserStore")
            .field("config", &self.inner.config)
            .field("consent", &self.consent_levels())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ACTIVE STORE
// =============================================================================

/// Slot holding the store the UI currently reads from and writes to.
#[derive(Clone)]
pub struct StoreContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    active: Mutex<BrowserStore>,
    relay: Mutex<Option<Subscription>>,
    keyed: Listeners<KeyListener>,
}

impl ContextInner {
    fn store(&self) -> BrowserStore {
        lock(&self.active).clone()
    }

    fn read(&self, key: &str, level: ConsentLevel) -> Option<String> {
        self.store().read(key, level)
    }
}

impl StoreContext {
    #[must_use]
    pub fn new(store: BrowserStore) -> Self {
        let context = Self {
            inner: Arc::new(ContextInner {
                active: Mutex::new(store.clone()),
                relay: Mutex::new(None),
                keyed: Listeners::new(),
            }),
        };
        context.attach(&store);
        context
    }

    /// The active store.
    #[must_use]
    pub fn store(&self) -> BrowserStore {
        self.inner.store()
    }

    /// Make `store` active, re-derive every subscriber from it, and hand the
    /// previous store back to the caller (who owns closing it).
    pub fn replace(&self, store: BrowserStore) -> BrowserStore {
        let previous = std::mem::replace(&mut *lock(&self.inner.active), store.clone());
        self.attach(&store);
        leptos::logging::log!("active store replaced: {store:?}");

        for listener in self.inner.keyed.snapshot() {
            (listener.callback)(store.read(&listener.key, listener.level));
        }
        previous
    }

    fn attach(&self, store: &BrowserStore) {
        let weak: Weak<ContextInner> = Arc::downgrade(&self.inner);
        let relay = store.watch(move |event| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            match event {
                StoreEvent::Written { key } => notify_key(&inner.keyed, key, |k, l| inner.read(k, l)),
                StoreEvent::ConsentChanged { levels } => notify_levels(&inner.keyed, levels, |k, l| inner.read(k, l)),
            }
        });
        // Dropping the previous relay detaches it from the old store.
        let previous = lock(&self.inner.relay).replace(relay);
        drop(previous);
    }
}

impl ConsentStore for StoreContext {
    fn read(&self, key: &str, level: ConsentLevel) -> Option<String> {
        self.inner.read(key, level)
    }

    fn write(&self, key: &str, level: ConsentLevel, value: &str) {
        self.store().write(key, level, value);
    }

    fn remove(&self, key: &str, level: ConsentLevel) {
        self.store().remove(key, level);
    }

    fn subscribe<F>(&self, key: &str, level: ConsentLevel, callback: F) -> Subscription
    where
        F: Fn(Option<String>) + Send + Sync + 'static,
    {
        self.inner
            .keyed
            .insert(Arc::new(KeyListener { key: key.to_owned(), level, callback: Box::new(callback) }))
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new(BrowserStore::session_default())
    }
}

impl std::fmt::Debug for StoreContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreContext").field("active", &self.store()).finish()
    }
}
