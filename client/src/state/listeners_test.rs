use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

type Callback = dyn Fn() + Send + Sync;

fn counter_listener(counter: &Arc<AtomicUsize>) -> Arc<Callback> {
    let counter = Arc::clone(counter);
    Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

// =============================================================
// Listeners
// =============================================================

#[test]
fn snapshot_preserves_registration_order() {
    let listeners: Listeners<dyn Fn() -> u8 + Send + Sync> = Listeners::new();
    let _a = listeners.insert(Arc::new(|| 1));
    let _b = listeners.insert(Arc::new(|| 2));

    let values: Vec<u8> = listeners.snapshot().iter().map(|l| l()).collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn dropping_subscription_detaches_listener() {
    let listeners: Listeners<Callback> = Listeners::new();
    let counter = Arc::new(AtomicUsize::new(0));
    let sub = listeners.insert(counter_listener(&counter));
    assert_eq!(listeners.len(), 1);

    drop(sub);
    assert_eq!(listeners.len(), 0);
    for l in listeners.snapshot() {
        l();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn unsubscribe_is_idempotent() {
    let listeners: Listeners<Callback> = Listeners::new();
    let counter = Arc::new(AtomicUsize::new(0));
    let mut keep = listeners.insert(counter_listener(&counter));
    let mut gone = listeners.insert(counter_listener(&counter));

    gone.unsubscribe();
    gone.unsubscribe();
    assert!(!gone.is_active());
    assert!(keep.is_active());
    assert_eq!(listeners.len(), 1);

    keep.unsubscribe();
    assert_eq!(listeners.len(), 0);
}

#[test]
fn subscription_outliving_table_is_harmless() {
    let listeners: Listeners<Callback> = Listeners::new();
    let counter = Arc::new(AtomicUsize::new(0));
    let sub = listeners.insert(counter_listener(&counter));
    drop(listeners);
    drop(sub);
}

#[test]
fn listener_may_reenter_table_during_notification() {
    let listeners: Listeners<Callback> = Listeners::new();
    let inner = listeners.clone();
    let _sub = listeners.insert(Arc::new(move || {
        // Re-entrant read of the table must not deadlock.
        let _ = inner.len();
    }));

    for l in listeners.snapshot() {
        l();
    }
}
