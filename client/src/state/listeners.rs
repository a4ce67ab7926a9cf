//! Listener tables and detachable subscriptions shared by state modules.
//!
//! DESIGN
//! ======
//! Every observable piece of client state (store, notification queue, tool
//! panel) keeps an explicit list of callbacks instead of relying on the
//! renderer to re-run reads. Callbacks are cloned out of the table before
//! they run, so a listener may re-enter the component that notified it
//! (read, write, subscribe, unsubscribe) without deadlocking.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Lock a mutex, recovering the inner value if a previous holder panicked.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct ListenerTable<L: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Arc<L>)>,
}

/// Ordered set of listeners of type `L` (usually a `dyn Fn`).
pub(crate) struct Listeners<L: ?Sized> {
    table: Arc<Mutex<ListenerTable<L>>>,
}

impl<L: ?Sized> Clone for Listeners<L> {
    fn clone(&self) -> Self {
        Self { table: Arc::clone(&self.table) }
    }
}

impl<L: ?Sized + Send + Sync + 'static> Listeners<L> {
    pub(crate) fn new() -> Self {
        Self { table: Arc::new(Mutex::new(ListenerTable { next_id: 0, entries: Vec::new() })) }
    }

    /// Register `listener`; it stays attached until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    pub(crate) fn insert(&self, listener: Arc<L>) -> Subscription {
        let id = {
            let mut table = lock(&self.table);
            table.next_id += 1;
            let id = table.next_id;
            table.entries.push((id, listener));
            id
        };

        let weak: Weak<Mutex<ListenerTable<L>>> = Arc::downgrade(&self.table);
        Subscription::new(move || {
            if let Some(table) = weak.upgrade() {
                lock(&table).entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Clone the current listeners in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Arc<L>> {
        lock(&self.table)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        lock(&self.table).entries.len()
    }
}

/// Handle for a registered listener. Detaches on [`Subscription::unsubscribe`]
/// or when dropped.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Detach the listener. Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Whether the listener is still attached through this handle.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}
