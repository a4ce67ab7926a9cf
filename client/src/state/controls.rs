//! Application controls handed to presentation code.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AppControls` at start-up and provides it as context.
//! Screens use it to push notifications and to claim the tool panel; they
//! never construct their own queue or panel.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use leptos::prelude::*;

use super::ids::IdSource;
use super::notifications::{MessageDefinition, NotificationHandle, NotificationQueue};
use super::set_state::SetState;
use super::tool_panel::{ToolPanel, ToolRegistration};
use crate::util::error_notify::{Failure, NotifyTarget, catch_notify};

/// Shared controls: the notification queue and the tool panel slot.
pub struct AppControls<C: 'static> {
    notifications: NotificationQueue,
    tools: ToolPanel<C>,
}

impl<C: 'static> Clone for AppControls<C> {
    fn clone(&self) -> Self {
        Self { notifications: self.notifications.clone(), tools: self.tools.clone() }
    }
}

impl<C: Clone + Send + Sync + 'static> AppControls<C> {
    #[must_use]
    pub fn new() -> Self {
        Self { notifications: NotificationQueue::new(), tools: ToolPanel::new() }
    }

    /// Controls with a custom notification id source.
    #[must_use]
    pub fn with_ids(ids: impl IdSource + 'static) -> Self {
        Self { notifications: NotificationQueue::with_ids(ids), tools: ToolPanel::new() }
    }

    #[must_use]
    pub fn notification(&self) -> NotificationControls<'_> {
        NotificationControls { queue: &self.notifications }
    }

    #[must_use]
    pub fn tools(&self) -> ToolControls<'_, C> {
        ToolControls { panel: &self.tools }
    }

    /// The underlying queue, for rendering.
    #[must_use]
    pub fn queue(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// The underlying panel, for rendering.
    #[must_use]
    pub fn panel(&self) -> &ToolPanel<C> {
        &self.tools
    }

    /// Setter for the panel's open flag, detached from `self`.
    pub fn tools_opener(&self) -> impl Fn(SetState<bool>) + Clone + Send + Sync + use<C> {
        let panel = self.tools.clone();
        move |open: SetState<bool>| panel.set_open(open)
    }

    /// Error sink that adds a notification to this queue.
    pub fn catch_notify<E: Into<Failure>>(&self, err_text: Option<&str>) -> impl Fn(E) + Clone + use<E, C> {
        catch_notify(NotifyTarget::Queue(self.notifications.clone()), err_text)
    }
}

impl<C: Clone + Send + Sync + 'static> Default for AppControls<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification surface of [`AppControls`].
#[derive(Clone, Copy)]
pub struct NotificationControls<'a> {
    queue: &'a NotificationQueue,
}

impl NotificationControls<'_> {
    pub fn add(&self, base: MessageDefinition) -> NotificationHandle {
        self.queue.add(base)
    }

    pub fn add_once(&self, base: MessageDefinition) {
        self.queue.add_once(base);
    }

    pub fn dismiss(&self, id: &str) -> bool {
        self.queue.dismiss(id)
    }

    pub fn notify_error(&self, failure: impl Into<Failure>, err_text: Option<&str>) {
        self.queue.notify_error(failure, err_text);
    }
}

/// Tool panel surface of [`AppControls`].
pub struct ToolControls<'a, C: 'static> {
    panel: &'a ToolPanel<C>,
}

impl<C: Clone + Send + Sync + 'static> ToolControls<'_, C> {
    pub fn set(&self, content: impl Into<SetState<Option<C>>>) {
        self.panel.set(content);
    }

    pub fn open(&self, open: impl Into<SetState<bool>>) {
        self.panel.set_open(open);
    }

    /// Claim the panel until the returned registration is released or dropped.
    pub fn register(&self, content: impl Into<Option<C>>) -> ToolRegistration {
        self.panel.register(content)
    }
}

/// Controls from context. Panics outside `App`, like other context lookups.
pub fn use_controls<C: Clone + Send + Sync + 'static>() -> AppControls<C> {
    expect_context::<AppControls<C>>()
}

/// Register `content` in the tool panel for the lifetime of the calling
/// component's reactive owner. Returns the panel's open setter.
pub fn use_tools<C: Clone + Send + Sync + 'static>(
    content: C,
) -> impl Fn(SetState<bool>) + Clone + Send + Sync + use<C> {
    let controls = use_controls::<C>();
    let registration = controls.tools().register(content);
    on_cleanup(move || drop(registration));
    controls.tools_opener()
}
