// SPDX-License-Identifier: MPL-2.0
//! A single notification and its lifecycle.
//!
//! ```text
//! Pending ──connect──▶ Entering ──transition end──▶ Idle ⇄ CountingDown
//!                         │                           │         │
//!                         └──────────── remove ───────┴─────────┘
//!                                         │
//!                                         ▼
//!                       Exiting ──transition end──▶ Removed
//! ```
//!
//! All timers are deadlines stored on the item and fired by
//! [`Notification::tick`]. The dismiss timer is a single slot: assigning
//! [`Notification::set_time`] always clears it before arming a new one.
//! Removals scheduled by behaviours are independent of each other and of the
//! dismiss timer; they are only dropped when the notification detaches.
//! A delay too large to be represented as an `Instant` never fires.

pub use crate::data::{Context, Icon, Level, NotificationData, Slot, WidgetFn};

use crate::animation::{Animation, Listener, Timing};
use crate::behaviours::{Behaviour, Effect};
use crate::error::Result;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, not yet added to a container.
    Pending,
    /// Attached and running the entrance animation.
    Entering,
    /// Shown without a dismiss timer.
    Idle,
    /// Shown with a dismiss timer armed.
    CountingDown,
    /// Running the exit animation.
    Exiting,
    /// Detached for good.
    Removed,
}

/// Lifecycle signals observable from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DeferredRemove {
    at: Instant,
    immediate: bool,
}

#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    title: Slot,
    content: Slot,
    icon: Icon,
    level: Level,
    closeable: bool,
    time: Option<Duration>,
    context: Option<Context>,
    phase: Phase,
    animation: Animation,
    dismiss_at: Option<Instant>,
    deferred_removes: Vec<DeferredRemove>,
    behaviours: Vec<Behaviour>,
    signals: Vec<Lifecycle>,
}

impl Notification {
    pub(crate) fn new(timing: Timing) -> Self {
        Self {
            id: NotificationId::new(),
            title: Slot::Empty,
            content: Slot::Empty,
            icon: Icon::None,
            level: Level::Default,
            closeable: true,
            time: None,
            context: None,
            phase: Phase::Pending,
            animation: Animation::new(timing),
            dismiss_at: None,
            deferred_removes: Vec::new(),
            behaviours: Vec::new(),
            signals: Vec::new(),
        }
    }

    /// Applies construction parameters to a pending notification.
    pub(crate) fn apply(&mut self, data: NotificationData) {
        self.icon = data.icon;
        self.title = data.title;
        self.content = data.content;
        self.time = data.time;
        self.level = data.level;
        self.closeable = data.closeable;
        self.context = data.context;
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the notification is part of a container.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !matches!(self.phase, Phase::Pending | Phase::Removed)
    }

    #[must_use]
    pub fn title(&self) -> &Slot {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &Slot {
        &self.content
    }

    #[must_use]
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Source of the icon, if it was given as a path or URL.
    #[must_use]
    pub fn icon_source(&self) -> Option<&str> {
        match &self.icon {
            Icon::Source(source) => Some(source),
            Icon::None | Icon::Image(_) => None,
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn closeable(&self) -> bool {
        self.closeable
    }

    /// Auto-dismiss time. `None` when disarmed.
    #[must_use]
    pub fn time(&self) -> Option<Duration> {
        self.time
    }

    #[must_use]
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// When the dismiss timer fires, if one is armed.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.dismiss_at
    }

    /// How much of the notification is shown, for rendering.
    #[must_use]
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Pending | Phase::Removed => 0.0,
            _ => self.animation.visibility(now),
        }
    }

    #[must_use]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn set_title(&mut self, title: impl Into<Slot>) {
        if self.ignore_when_removed("title") {
            return;
        }
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<Slot>) {
        if self.ignore_when_removed("content") {
            return;
        }
        self.content = content.into();
    }

    pub fn set_icon(&mut self, icon: impl Into<Icon>) {
        if self.ignore_when_removed("icon") {
            return;
        }
        self.icon = icon.into();
    }

    pub fn set_level(&mut self, level: Level) {
        if self.ignore_when_removed("level") {
            return;
        }
        self.level = level;
    }

    /// Sets the level by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLevel`](crate::error::Error::InvalidLevel) for
    /// unknown names; the current level is kept.
    pub fn set_level_name(&mut self, name: &str) -> Result<()> {
        let level = name.parse()?;
        self.set_level(level);
        Ok(())
    }

    pub fn set_closeable(&mut self, closeable: bool) {
        if self.ignore_when_removed("closeable") {
            return;
        }
        self.closeable = closeable;
    }

    /// Replaces the auto-dismiss time, cancelling any armed timer.
    ///
    /// A new timer is armed right away only once the entrance has finished;
    /// before that the value is kept and armed when it does.
    pub fn set_time(&mut self, time: Option<Duration>, now: Instant) {
        if self.ignore_when_removed("time") {
            return;
        }
        self.disarm();
        self.time = time;
        if let (Some(time), Phase::Idle) = (time, self.phase) {
            let Some(at) = now.checked_add(time) else {
                trace!(id = ?self.id, ?time, "dismiss time out of range, timer not armed");
                return;
            };
            self.dismiss_at = Some(at);
            self.phase = Phase::CountingDown;
            trace!(id = ?self.id, ?time, "dismiss timer armed");
        }
    }

    /// Clears `time` and any armed dismiss timer.
    pub(crate) fn disarm(&mut self) {
        self.time = None;
        if self.dismiss_at.take().is_some() {
            trace!(id = ?self.id, "dismiss timer cancelled");
        }
        if self.phase == Phase::CountingDown {
            self.phase = Phase::Idle;
        }
    }

    /// Removes the notification.
    ///
    /// With `immediate` the notification detaches at once. Otherwise the exit
    /// animation runs first; calling again while it runs does nothing.
    pub fn remove(&mut self, immediate: bool, now: Instant) {
        match self.phase {
            Phase::Removed => return,
            Phase::Pending => {
                self.phase = Phase::Removed;
                self.dismiss_at = None;
                self.deferred_removes.clear();
                return;
            }
            Phase::Exiting if !immediate => return,
            _ => {}
        }

        if immediate {
            self.detach();
            return;
        }

        self.dismiss_at = None;
        self.phase = Phase::Exiting;
        self.animation.begin_exit(now);
        debug!(id = ?self.id, "notification exiting");
    }

    /// Attaches the notification and starts the entrance.
    pub(crate) fn connect(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Pending {
            return false;
        }
        self.phase = Phase::Entering;
        self.animation.begin_enter(now);
        self.signals.push(Lifecycle::Connected);
        debug!(id = ?self.id, level = %self.level, "notification connected");
        true
    }

    /// Earliest pending deadline of any kind.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.animation.next_deadline(),
            self.dismiss_at,
            self.deferred_removes.iter().map(|deferred| deferred.at).min(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Fires every deadline due at or before `now`, oldest first.
    pub fn tick(&mut self, now: Instant) {
        while let Some(due) = self.next_deadline().filter(|due| *due <= now) {
            if self.animation.next_deadline() == Some(due) {
                if let Some(listener) = self.animation.advance(due) {
                    self.on_transition_end(listener, due);
                }
            } else if self.dismiss_at == Some(due) {
                self.dismiss_at = None;
                debug!(id = ?self.id, "notification timed out");
                self.remove(false, due);
            } else if let Some(index) = self
                .deferred_removes
                .iter()
                .position(|deferred| deferred.at == due)
            {
                let deferred = self.deferred_removes.remove(index);
                self.remove(deferred.immediate, deferred.at);
            }
        }
    }

    /// The rendering layer reports that the running transition finished.
    pub fn transition_ended(&mut self, now: Instant) {
        if let Some(listener) = self.animation.transition_ended() {
            self.on_transition_end(listener, now);
        }
    }

    pub fn pointer_entered(&mut self, now: Instant) {
        self.dispatch(now, Behaviour::on_pointer_enter);
    }

    pub fn pointer_left(&mut self, now: Instant) {
        self.dispatch(now, Behaviour::on_pointer_leave);
    }

    pub fn clicked(&mut self, now: Instant) {
        self.dispatch(now, Behaviour::on_click);
    }

    pub(crate) fn attach_behaviour(&mut self, behaviour: Behaviour) {
        self.behaviours.push(behaviour);
    }

    /// Drains lifecycle signals emitted since the last call.
    pub(crate) fn take_signals(&mut self) -> Vec<Lifecycle> {
        std::mem::take(&mut self.signals)
    }

    fn dispatch(&mut self, now: Instant, hook: fn(&mut Behaviour, &mut Vec<Effect>)) {
        if !self.is_attached() {
            return;
        }
        let mut effects = Vec::new();
        for behaviour in &mut self.behaviours {
            hook(behaviour, &mut effects);
        }
        for effect in effects {
            self.apply_effect(effect, now);
        }
    }

    fn apply_effect(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::DisarmTimer => self.disarm(),
            Effect::RestoreTimer(time) => self.set_time(Some(time), now),
            Effect::ScheduleRemove { after, immediate } => {
                if !self.is_attached() {
                    return;
                }
                match now.checked_add(after) {
                    Some(at) => self.deferred_removes.push(DeferredRemove { at, immediate }),
                    None => trace!(id = ?self.id, ?after, "removal delay out of range, not scheduled"),
                }
            }
            Effect::Remove { immediate } => self.remove(immediate, now),
        }
    }

    fn on_transition_end(&mut self, listener: Listener, at: Instant) {
        match listener {
            Listener::Entered if self.phase == Phase::Entering => {
                self.phase = Phase::Idle;
                debug!(id = ?self.id, "notification entered");
                self.set_time(self.time, at);
            }
            Listener::Entered => {}
            Listener::Exited => self.detach(),
        }
    }

    fn detach(&mut self) {
        self.dismiss_at = None;
        self.deferred_removes.clear();
        self.animation.cancel();
        self.phase = Phase::Removed;
        self.signals.push(Lifecycle::Disconnected);
        debug!(id = ?self.id, "notification disconnected");
    }

    fn ignore_when_removed(&self, field: &str) -> bool {
        let removed = self.phase == Phase::Removed;
        if removed {
            debug!(id = ?self.id, field, "ignoring update of removed notification");
        }
        removed
    }
}
