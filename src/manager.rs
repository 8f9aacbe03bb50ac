// SPDX-License-Identifier: MPL-2.0
//! Notification container.
//!
//! The `Manager` owns the ordered stack of attached notifications (front is
//! the top of the screen), inserts new ones at an offset, and funnels every
//! removal through [`Notification::remove`]. Notifications that finish
//! detaching leave the stack in the same call that detached them.

use crate::error::{Error, Result};
use crate::notification::{Context, Lifecycle, Notification, NotificationId, Phase};
use crate::registry::Registry;
use crate::styles::{ContainerStyle, ItemStyle};
use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tick for firing animation steps and dismiss timers.
    Tick(Instant),
    /// The rendering layer finished a notification's transition.
    TransitionEnded(NotificationId),
    PointerEntered(NotificationId),
    PointerLeft(NotificationId),
    Clicked(NotificationId),
    /// The close affordance was pressed.
    Close(NotificationId),
    Remove {
        id: NotificationId,
        immediate: bool,
    },
}

/// A lifecycle signal together with the notification that emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub id: NotificationId,
    pub lifecycle: Lifecycle,
}

/// Ordered container of attached notifications.
#[derive(Debug)]
pub struct Manager {
    name: String,
    style: ContainerStyle,
    item_style: ItemStyle,
    /// Attached notifications in visual order (top first).
    items: Vec<Notification>,
    members: HashSet<NotificationId>,
    events: Vec<Event>,
}

impl Manager {
    /// Creates an empty container using the registered name and styles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] before the registry was registered.
    pub fn new(registry: &Registry) -> Result<Self> {
        let registration = registry.registration().ok_or(Error::NotRegistered)?;
        Ok(Self {
            name: registration.name().to_string(),
            style: *registration.container_style(),
            item_style: *registration.item_style(),
            items: Vec::new(),
            members: HashSet::new(),
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn style(&self) -> &ContainerStyle {
        &self.style
    }

    #[must_use]
    pub fn item_style(&self) -> &ItemStyle {
        &self.item_style
    }

    /// Position `offset` resolves to in a stack of `len` notifications.
    ///
    /// Non-negative offsets count from the front (`0` is the top) and clamp
    /// to the end. `-1` is the end, lower values count back from it and
    /// clamp to the front.
    #[must_use]
    pub fn insertion_index(len: usize, offset: isize) -> usize {
        match offset {
            0 => 0,
            offset if offset > 0 => offset.unsigned_abs().min(len),
            -1 => len,
            offset => {
                let from_end = (offset + 1).unsigned_abs();
                len.saturating_sub(from_end)
            }
        }
    }

    /// Inserts `notification` at `offset` and starts its entrance.
    pub fn add(&mut self, mut notification: Notification, offset: isize, now: Instant) -> NotificationId {
        let id = notification.id();
        if !self.members.insert(id) {
            return id;
        }
        let index = Self::insertion_index(self.items.len(), offset);
        notification.connect(now);
        self.items.insert(index, notification);
        debug!(?id, offset, index, len = self.items.len(), "notification added");
        self.sweep();
        id
    }

    /// Removes a tracked notification. Unknown ids are ignored.
    pub fn remove(&mut self, id: NotificationId, immediate: bool, now: Instant) {
        self.update(id, |notification| notification.remove(immediate, now));
    }

    /// Removes every notification whose context equals `context`.
    pub fn remove_with_context(&mut self, context: &Context, immediate: bool, now: Instant) {
        let matching: Vec<NotificationId> = self.ids(Some(context));
        debug!(?context, count = matching.len(), immediate, "removing by context");
        for id in matching {
            self.remove(id, immediate, now);
        }
    }

    /// Attached notifications in visual order, optionally filtered by context.
    #[must_use]
    pub fn notifications(&self, context: Option<&Context>) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| context.is_none_or(|context| n.context() == Some(context)))
            .collect()
    }

    /// Ids of [`Manager::notifications`].
    #[must_use]
    pub fn ids(&self, context: Option<&Context>) -> Vec<NotificationId> {
        self.notifications(context)
            .into_iter()
            .map(Notification::id)
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        if !self.contains(id) {
            return None;
        }
        self.items.iter().find(|n| n.id() == id)
    }

    /// Runs `f` on a tracked notification. Returns `None` for unknown ids.
    pub fn update<R>(
        &mut self,
        id: NotificationId,
        f: impl FnOnce(&mut Notification) -> R,
    ) -> Option<R> {
        if !self.contains(id) {
            return None;
        }
        let notification = self.items.iter_mut().find(|n| n.id() == id)?;
        let result = f(notification);
        self.sweep();
        Some(result)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.members.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any notification has a pending deadline.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.items.iter().any(|n| n.next_deadline().is_some())
    }

    /// Fires all deadlines due at `now`.
    pub fn tick(&mut self, now: Instant) {
        for notification in &mut self.items {
            notification.tick(now);
        }
        self.sweep();
    }

    pub fn transition_ended(&mut self, id: NotificationId, now: Instant) {
        self.update(id, |notification| notification.transition_ended(now));
    }

    /// Drains the lifecycle signals emitted since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match *message {
            Message::Tick(at) => self.tick(at),
            Message::TransitionEnded(id) => self.transition_ended(id, now),
            Message::PointerEntered(id) => {
                self.update(id, |n| n.pointer_entered(now));
            }
            Message::PointerLeft(id) => {
                self.update(id, |n| n.pointer_left(now));
            }
            Message::Clicked(id) => {
                self.update(id, |n| n.clicked(now));
            }
            Message::Close(id) => self.remove(id, false, now),
            Message::Remove { id, immediate } => self.remove(id, immediate, now),
        }
    }

    /// Collects lifecycle signals and drops detached notifications.
    fn sweep(&mut self) {
        for notification in &mut self.items {
            let id = notification.id();
            self.events.extend(
                notification
                    .take_signals()
                    .into_iter()
                    .map(|lifecycle| Event { id, lifecycle }),
            );
        }
        let members = &mut self.members;
        self.items.retain(|n| {
            let keep = n.phase() != Phase::Removed;
            if !keep {
                members.remove(&n.id());
            }
            keep
        });
    }
}
