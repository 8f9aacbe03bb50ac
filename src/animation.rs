// SPDX-License-Identifier: MPL-2.0
//! Entrance and exit staging for a single notification.
//!
//! An item is either *collapsed* (zero height, transparent) or expanded.
//! Toggling the collapsed state while the transition is enabled starts a
//! transition of [`Timing::transition`] length; when it finishes, the
//! one-shot [`Listener`] armed by [`Animation::begin_enter`] or
//! [`Animation::begin_exit`] fires exactly once.
//!
//! Entrance: collapse at once, enable the transition after
//! `enter_transition_delay`, expand at `enter_expand_delay`.
//! Exit: enable the transition, collapse after `exit_collapse_delay`.

use crate::config::defaults;
use std::time::{Duration, Instant};

/// Delays and durations of the staged animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub enter_transition_delay: Duration,
    pub enter_expand_delay: Duration,
    pub exit_collapse_delay: Duration,
    pub transition: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enter_transition_delay: Duration::from_millis(defaults::ENTER_TRANSITION_DELAY_MS),
            enter_expand_delay: Duration::from_millis(defaults::ENTER_EXPAND_DELAY_MS),
            exit_collapse_delay: Duration::from_millis(defaults::EXIT_COLLAPSE_DELAY_MS),
            transition: Duration::from_millis(defaults::TRANSITION_DURATION_MS),
        }
    }
}

impl Timing {
    /// Timing with a custom transition length and the default staging delays.
    #[must_use]
    pub fn with_transition(transition: Duration) -> Self {
        Self {
            transition,
            ..Self::default()
        }
    }
}

/// One-shot reaction to the end of the current transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// The entrance finished; the item becomes idle.
    Entered,
    /// The exit finished; the item detaches.
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    EnableTransition,
    Expand,
    Collapse,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    started_at: Instant,
    ends_at: Instant,
    from: f32,
    to: f32,
}

/// `at + delay`, or `at` itself when the sum does not fit in an `Instant`.
fn after(at: Instant, delay: Duration) -> Instant {
    at.checked_add(delay).unwrap_or(at)
}

#[derive(Debug, Clone)]
pub struct Animation {
    timing: Timing,
    collapsed: bool,
    transition_enabled: bool,
    running: Option<Transition>,
    step: Option<(Instant, Step)>,
    listener: Option<Listener>,
}

impl Animation {
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            collapsed: false,
            transition_enabled: false,
            running: None,
            step: None,
            listener: None,
        }
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    #[must_use]
    pub fn is_transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    #[must_use]
    pub fn listener(&self) -> Option<Listener> {
        self.listener
    }

    /// Starts the entrance: collapsed now, expanded after the staging delays.
    pub fn begin_enter(&mut self, now: Instant) {
        self.collapsed = true;
        self.transition_enabled = false;
        self.running = None;
        self.step = Some((
            after(now, self.timing.enter_transition_delay),
            Step::EnableTransition,
        ));
        self.listener = Some(Listener::Entered);
    }

    /// Starts the exit. Replaces any pending entrance step and listener.
    ///
    /// A running transition that would end before the collapse is dropped,
    /// so only the collapse can fire [`Listener::Exited`].
    pub fn begin_exit(&mut self, now: Instant) {
        let collapse_at = after(now, self.timing.exit_collapse_delay);
        if self
            .running
            .is_some_and(|transition| transition.ends_at <= collapse_at)
        {
            self.running = None;
        }
        self.transition_enabled = true;
        self.step = Some((collapse_at, Step::Collapse));
        self.listener = Some(Listener::Exited);
    }

    /// Drops every staged step, running transition and listener.
    pub fn cancel(&mut self) {
        self.step = None;
        self.running = None;
        self.listener = None;
    }

    /// Earliest instant at which [`Animation::advance`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let step = self.step.map(|(at, _)| at);
        let end = self.running.map(|transition| transition.ends_at);
        match (step, end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Performs the work due at `at` (a value returned by `next_deadline`).
    ///
    /// Returns the listener that fired, if any.
    pub fn advance(&mut self, at: Instant) -> Option<Listener> {
        let step_due = self.step.filter(|(due, _)| *due <= at);
        let end_due = self
            .running
            .map(|transition| transition.ends_at)
            .filter(|end| *end <= at);

        match (step_due, end_due) {
            (Some((due, step)), end) if end.is_none_or(|end| due <= end) => {
                self.step = None;
                self.run_step(step, due)
            }
            (_, Some(_)) => {
                self.running = None;
                self.finish()
            }
            _ => None,
        }
    }

    /// The transition-finished signal from the rendering layer.
    pub fn transition_ended(&mut self) -> Option<Listener> {
        self.listener?;
        self.step = None;
        self.running = None;
        self.finish()
    }

    /// How much of the item is shown: `0.0` collapsed, `1.0` expanded.
    #[must_use]
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.running {
            Some(transition) => {
                let length = transition.ends_at - transition.started_at;
                let elapsed = now.saturating_duration_since(transition.started_at);
                let progress = if length.is_zero() {
                    1.0
                } else {
                    (elapsed.as_secs_f32() / length.as_secs_f32()).min(1.0)
                };
                transition.from + (transition.to - transition.from) * progress
            }
            None if self.collapsed => 0.0,
            None => 1.0,
        }
    }

    fn run_step(&mut self, step: Step, at: Instant) -> Option<Listener> {
        match step {
            Step::EnableTransition => {
                self.transition_enabled = true;
                let remaining = self
                    .timing
                    .enter_expand_delay
                    .saturating_sub(self.timing.enter_transition_delay);
                self.step = Some((after(at, remaining), Step::Expand));
                None
            }
            Step::Expand => {
                self.set_collapsed(false, at);
                None
            }
            // Nothing to transition when already collapsed, so no end signal will come.
            Step::Collapse if !self.set_collapsed(true, at) => self.finish(),
            Step::Collapse => None,
        }
    }

    fn set_collapsed(&mut self, collapsed: bool, at: Instant) -> bool {
        if self.collapsed == collapsed {
            return false;
        }
        let from = self.visibility(at);
        self.collapsed = collapsed;
        self.running = self.transition_enabled.then_some(Transition {
            started_at: at,
            ends_at: after(at, self.timing.transition),
            from,
            to: if collapsed { 0.0 } else { 1.0 },
        });
        true
    }

    fn finish(&mut self) -> Option<Listener> {
        let listener = self.listener.take()?;
        self.running = None;
        if listener == Listener::Entered {
            self.step = None;
            self.collapsed = false;
            self.transition_enabled = false;
        }
        Some(listener)
    }
}
