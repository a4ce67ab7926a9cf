//! Tool panel slot with stacked registrations.
//!
//! DESIGN
//! ======
//! One visible slot, many potential owners. Each `register` pushes an entry
//! and the top entry is what the panel shows; releasing an entry removes
//! exactly that entry. Releasing in order therefore restores the previous
//! owner's content, and releasing out of order never surfaces content whose
//! owner already left, nor hides a still-registered owner.
//!
//! The open flag is independent of content, but a panel without content is
//! always reported closed.

#[cfg(test)]
#[path = "tool_panel_test.rs"]
mod tool_panel_test;

use std::sync::{Arc, Mutex, Weak};

use super::listeners::{Listeners, Subscription, lock};
use super::set_state::SetState;

/// What the panel currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolPanelSnapshot<C> {
    pub content: Option<C>,
    pub open: bool,
}

struct ToolSlot<C> {
    base: Option<C>,
    stack: Vec<(u64, Option<C>)>,
    next_id: u64,
    open: bool,
}

impl<C: Clone> ToolSlot<C> {
    fn visible(&self) -> Option<&C> {
        match self.stack.last() {
            Some((_, content)) => content.as_ref(),
            None => self.base.as_ref(),
        }
    }

    /// Registration id of the visible entry, `None` for the base slot.
    fn visible_owner(&self) -> Option<u64> {
        self.stack.last().map(|(id, _)| *id)
    }

    /// Entry owned by `owner`, if it is still registered.
    fn entry_mut(&mut self, owner: Option<u64>) -> Option<&mut Option<C>> {
        match owner {
            Some(id) => self.stack.iter_mut().find(|(entry_id, _)| *entry_id == id).map(|(_, content)| content),
            None => Some(&mut self.base),
        }
    }

    fn snapshot(&self) -> ToolPanelSnapshot<C> {
        let content = self.visible().cloned();
        let open = self.open && content.is_some();
        ToolPanelSnapshot { content, open }
    }
}

type PanelListener<C> = dyn Fn(&ToolPanelSnapshot<C>) + Send + Sync;

struct PanelInner<C: 'static> {
    slot: Mutex<ToolSlot<C>>,
    listeners: Listeners<PanelListener<C>>,
}

/// Handle to the application's single tool panel slot.
pub struct ToolPanel<C: 'static> {
    inner: Arc<PanelInner<C>>,
}

impl<C: 'static> Clone for ToolPanel<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<C: Clone + Send + Sync + 'static> ToolPanel<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(PanelInner {
                slot: Mutex::new(ToolSlot { base: None, stack: Vec::new(), next_id: 0, open: false }),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Show `content` until the returned registration is released.
    pub fn register(&self, content: impl Into<Option<C>>) -> ToolRegistration {
        let id = {
            let mut slot = lock(&self.inner.slot);
            slot.next_id += 1;
            let id = slot.next_id;
            slot.stack.push((id, content.into()));
            id
        };
        self.changed();

        let weak: Weak<PanelInner<C>> = Arc::downgrade(&self.inner);
        ToolRegistration {
            release: Some(Box::new(move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let removed = {
                    let mut slot = lock(&inner.slot);
                    let before = slot.stack.len();
                    slot.stack.retain(|(entry_id, _)| *entry_id != id);
                    slot.stack.len() != before
                };
                if removed {
                    ToolPanel { inner }.changed();
                }
            })),
        }
    }

    /// Replace or update the visible content in place.
    ///
    /// Updaters run without the slot lock held, so they may read the panel.
    /// The result lands on the entry that was visible when `set` was called;
    /// if that registration was released meanwhile the update is dropped.
    pub fn set(&self, content: impl Into<SetState<Option<C>>>) {
        let (owner, current) = {
            let slot = lock(&self.inner.slot);
            (slot.visible_owner(), slot.visible().cloned())
        };
        let next = content.into().apply(&current);
        let committed = {
            let mut slot = lock(&self.inner.slot);
            match slot.entry_mut(owner) {
                Some(entry) => {
                    *entry = next;
                    true
                }
                None => false,
            }
        };
        if committed {
            self.changed();
        }
    }

    /// Replace or update the open flag. Content is unaffected.
    pub fn set_open(&self, open: impl Into<SetState<bool>>) {
        let current = lock(&self.inner.slot).open;
        let next = open.into().apply(&current);
        lock(&self.inner.slot).open = next;
        self.changed();
    }

    #[must_use]
    pub fn content(&self) -> Option<C> {
        lock(&self.inner.slot).visible().cloned()
    }

    /// Open flag as rendered: always `false` without content.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.snapshot().open
    }

    #[must_use]
    pub fn snapshot(&self) -> ToolPanelSnapshot<C> {
        lock(&self.inner.slot).snapshot()
    }

    /// Call `callback` with the new snapshot after every change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ToolPanelSnapshot<C>) + Send + Sync + 'static,
    {
        self.inner.listeners.insert(Arc::new(callback))
    }

    fn changed(&self) {
        let listeners = self.inner.listeners.snapshot();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl<C: Clone + Send + Sync + 'static> Default for ToolPanel<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration returned by [`ToolPanel::register`]. Released explicitly or
/// on drop; releasing twice is a no-op.
#[must_use = "dropping a ToolRegistration releases the panel content immediately"]
pub struct ToolRegistration {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ToolRegistration {
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for ToolRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ToolRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistration").field("released", &self.is_released()).finish()
    }
}
