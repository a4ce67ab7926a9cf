//! Flash notification queue with addressable update handles.
//!
//! DESIGN
//! ======
//! Messages are kept newest-first and addressed only by their generated id.
//! `add` returns a [`NotificationHandle`] that remembers the definition its
//! owner last pushed; updates start from that value rather than from the
//! rendered list, so a dismissal racing an update cannot make the owner
//! lose its own state. An update whose id is no longer listed goes back in
//! at the front instead of vanishing.
//!
//! Dismissal is two-phase: the message's `on_dismiss` callback runs first
//! with a cancelable [`DismissEvent`], then the entry is removed only if it
//! is `dismissible` and the callback did not cancel.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::sync::{Arc, Mutex};

use super::ids::{IdSource, UuidIds};
use super::listeners::{Listeners, Subscription, lock};
use super::set_state::SetState;
use crate::util::error_notify::ErrorReport;

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    InProgress,
}

impl MessageType {
    /// Modifier used in the `notification--{kind}` CSS class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::InProgress => "in-progress",
        }
    }
}

/// Body of a notification.
#[derive(Clone, Debug, PartialEq)]
pub enum NotificationContent {
    Text(String),
    Error(ErrorReport),
}

impl From<&str> for NotificationContent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NotificationContent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Cancelable signal passed to `on_dismiss`.
#[derive(Debug)]
pub struct DismissEvent {
    id: String,
    prevented: bool,
}

impl DismissEvent {
    fn new(id: &str) -> Self {
        Self { id: id.to_owned(), prevented: false }
    }

    /// Id of the message being dismissed.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Keep the message in the queue.
    pub fn prevent_default(&mut self) {
        self.prevented = true;
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.prevented
    }
}

pub type DismissCallback = Arc<dyn Fn(&mut DismissEvent) + Send + Sync>;

/// Caller-supplied notification, before an id is attached.
#[derive(Clone)]
pub struct MessageDefinition {
    pub kind: MessageType,
    pub header: Option<String>,
    pub content: NotificationContent,
    pub dismissible: bool,
    pub loading: bool,
    pub on_dismiss: Option<DismissCallback>,
}

impl MessageDefinition {
    #[must_use]
    pub fn new(kind: MessageType, content: impl Into<NotificationContent>) -> Self {
        Self { kind, header: None, content: content.into(), dismissible: false, loading: false, on_dismiss: None }
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, callback: impl Fn(&mut DismissEvent) + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Arc::new(callback));
        self
    }
}

impl std::fmt::Debug for MessageDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageDefinition")
            .field("kind", &self.kind)
            .field("header", &self.header)
            .field("content", &self.content)
            .field("dismissible", &self.dismissible)
            .field("loading", &self.loading)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// A queued message with its generated id.
#[derive(Clone, Debug)]
pub struct Notification {
    pub id: String,
    pub message: MessageDefinition,
}

type QueueListener = dyn Fn(&[Notification]) + Send + Sync;

/// Ordered, addressable list of visible notifications.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<QueueInner>,
}

struct QueueInner {
    messages: Mutex<Vec<Notification>>,
    ids: Box<dyn IdSource>,
    listeners: Listeners<QueueListener>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(UuidIds)
    }

    #[must_use]
    pub fn with_ids(ids: impl IdSource + 'static) -> Self {
        Self {
            inner: Arc::new(QueueInner {
                messages: Mutex::new(Vec::new()),
                ids: Box::new(ids),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Insert at the front without keeping a handle.
    pub fn add_once(&self, base: MessageDefinition) {
        self.push_front(base);
    }

    /// Insert at the front and return a handle for later updates.
    pub fn add(&self, base: MessageDefinition) -> NotificationHandle {
        let id = self.push_front(base.clone());
        NotificationHandle {
            inner: Arc::new(HandleInner { queue: self.clone(), id, last_pushed: Mutex::new(base) }),
        }
    }

    fn push_front(&self, base: MessageDefinition) -> String {
        let id = self.inner.ids.next_id();
        lock(&self.inner.messages).insert(0, Notification { id: id.clone(), message: base });
        self.changed();
        id
    }

    /// Replace the message with `id` in place, or insert it at the front if
    /// it is no longer listed.
    fn upsert(&self, id: &str, message: MessageDefinition) {
        {
            let mut messages = lock(&self.inner.messages);
            match messages.iter_mut().find(|n| n.id == id) {
                Some(existing) => existing.message = message,
                None => messages.insert(0, Notification { id: id.to_owned(), message }),
            }
        }
        self.changed();
    }

    /// Run the message's `on_dismiss`, then remove it if it is dismissible
    /// and the callback did not cancel. Returns whether it was removed.
    pub fn dismiss(&self, id: &str) -> bool {
        let target = lock(&self.inner.messages)
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.message.clone());
        let Some(message) = target else {
            return false;
        };

        let mut event = DismissEvent::new(id);
        if let Some(on_dismiss) = &message.on_dismiss {
            on_dismiss(&mut event);
        }
        if message.dismissible && !event.default_prevented() {
            return self.remove(id);
        }
        false
    }

    /// Remove the message with `id` unconditionally.
    pub fn remove(&self, id: &str) -> bool {
        let removed = {
            let mut messages = lock(&self.inner.messages);
            let before = messages.len();
            messages.retain(|n| n.id != id);
            messages.len() != before
        };
        if removed {
            self.changed();
        }
        removed
    }

    /// Snapshot of the queue, newest first.
    #[must_use]
    pub fn messages(&self) -> Vec<Notification> {
        lock(&self.inner.messages).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.inner.messages).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `callback` with the new list after every change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&[Notification]) + Send + Sync + 'static,
    {
        self.inner.listeners.insert(Arc::new(callback))
    }

    fn changed(&self) {
        let listeners = self.inner.listeners.snapshot();
        if listeners.is_empty() {
            return;
        }
        let messages = self.messages();
        for listener in listeners {
            listener(&messages);
        }
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationQueue").field("messages", &self.messages()).finish()
    }
}

/// Update handle for a message added with [`NotificationQueue::add`].
#[derive(Clone)]
pub struct NotificationHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    queue: NotificationQueue,
    id: String,
    last_pushed: Mutex<MessageDefinition>,
}

impl NotificationHandle {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Definition most recently pushed through this handle.
    #[must_use]
    pub fn last_pushed(&self) -> MessageDefinition {
        lock(&self.inner.last_pushed).clone()
    }

    /// Push a replacement, or a function of the last pushed definition.
    pub fn update(&self, next: impl Into<SetState<MessageDefinition>>) {
        let current = self.last_pushed();
        let message = next.into().apply(&current);
        *lock(&self.inner.last_pushed) = message.clone();
        self.inner.queue.upsert(&self.inner.id, message);
    }

    /// Remove the message regardless of `dismissible`.
    pub fn clear(&self) -> bool {
        self.inner.queue.remove(&self.inner.id)
    }
}

impl std::fmt::Debug for NotificationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHandle").field("id", &self.inner.id).finish_non_exhaustive()
    }
}
