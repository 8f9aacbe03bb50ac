// SPDX-License-Identifier: MPL-2.0
//! Behaviours augment a [`Notification`] with interaction-driven removal.
//!
//! Each function takes the notification by value, attaches a listener and
//! hands it back, so behaviours compose:
//!
//! ```ignore
//! let item = behaviours::close_on_click(behaviours::ensure_hover(item), false);
//! manager.add(item, 0, Instant::now());
//! ```

use crate::config::defaults;
use crate::notification::Notification;
use std::time::Duration;

/// Delay used by the mouse behaviours when callers have no preference.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(defaults::DEFAULT_BEHAVIOUR_TIMEOUT_MS);

#[derive(Debug, Clone)]
pub(crate) enum Behaviour {
    CloseAfterMouseEnter {
        timeout: Duration,
        immediate: bool,
        triggered: bool,
    },
    CloseAfterMouseLeave {
        timeout: Duration,
        immediate: bool,
        entered: bool,
    },
    CloseOnClick {
        immediate: bool,
    },
    EnsureHover {
        /// Taken on the first pointer-leave.
        time: Option<Duration>,
    },
}

/// What a behaviour asks of its notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Effect {
    DisarmTimer,
    RestoreTimer(Duration),
    ScheduleRemove { after: Duration, immediate: bool },
    Remove { immediate: bool },
}

impl Behaviour {
    pub(crate) fn on_pointer_enter(&mut self, effects: &mut Vec<Effect>) {
        match self {
            Behaviour::CloseAfterMouseEnter {
                timeout,
                immediate,
                triggered,
            } if !*triggered => {
                *triggered = true;
                effects.push(Effect::DisarmTimer);
                effects.push(Effect::ScheduleRemove {
                    after: *timeout,
                    immediate: *immediate,
                });
            }
            Behaviour::CloseAfterMouseLeave { entered, .. } if !*entered => {
                *entered = true;
                effects.push(Effect::DisarmTimer);
            }
            _ => {}
        }
    }

    pub(crate) fn on_pointer_leave(&mut self, effects: &mut Vec<Effect>) {
        match self {
            Behaviour::CloseAfterMouseLeave {
                timeout, immediate, ..
            } => effects.push(Effect::ScheduleRemove {
                after: *timeout,
                immediate: *immediate,
            }),
            Behaviour::EnsureHover { time } => {
                if let Some(time) = time.take() {
                    effects.push(Effect::RestoreTimer(time));
                }
            }
            _ => {}
        }
    }

    pub(crate) fn on_click(&mut self, effects: &mut Vec<Effect>) {
        if let Behaviour::CloseOnClick { immediate } = self {
            effects.push(Effect::Remove {
                immediate: *immediate,
            });
        }
    }
}

/// On the first pointer-enter, disarms the automatic timer and removes the
/// notification `timeout` later.
#[must_use]
pub fn close_after_mouse_enter(
    mut item: Notification,
    timeout: Duration,
    immediate: bool,
) -> Notification {
    item.attach_behaviour(Behaviour::CloseAfterMouseEnter {
        timeout,
        immediate,
        triggered: false,
    });
    item
}

/// On the first pointer-enter, disarms the automatic timer; every
/// pointer-leave then schedules removal `timeout` later.
#[must_use]
pub fn close_after_mouse_leave(
    mut item: Notification,
    timeout: Duration,
    immediate: bool,
) -> Notification {
    item.attach_behaviour(Behaviour::CloseAfterMouseLeave {
        timeout,
        immediate,
        entered: false,
    });
    item
}

/// Any click on the notification removes it.
#[must_use]
pub fn close_on_click(mut item: Notification, immediate: bool) -> Notification {
    item.attach_behaviour(Behaviour::CloseOnClick { immediate });
    item
}

/// Holds the countdown until the user has hovered and left once.
///
/// Does nothing when the notification has no `time`.
#[must_use]
pub fn ensure_hover(mut item: Notification) -> Notification {
    let Some(time) = item.time() else {
        return item;
    };
    item.disarm();
    item.attach_behaviour(Behaviour::EnsureHover { time: Some(time) });
    item
}
