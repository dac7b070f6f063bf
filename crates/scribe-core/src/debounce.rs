//! Deadline-based timing helpers driven by an explicit clock.
//!
//! The host owns the actual timers; these types only decide *when*
//! something is due, so they can be stepped with a `ManualClock` in tests.

use smol_str::SmolStr;
use web_time::{Duration, Instant};

/// Trailing-edge debouncer with a single pending deadline.
///
/// Every `schedule` replaces the previous deadline, so a burst of edits
/// produces one firing `delay` after the last of them.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending deadline and schedule a new one from `now`.
    pub fn schedule(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Time left until the pending deadline, `None` when nothing is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consume the deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

/// A label that switches to an "active" text for a fixed duration.
///
/// Used for the copy button's "Copied!" confirmation.
#[derive(Debug, Clone)]
pub struct TransientLabel {
    idle: SmolStr,
    active: SmolStr,
    duration: Duration,
    until: Option<Instant>,
}

impl TransientLabel {
    pub fn new(idle: impl Into<SmolStr>, active: impl Into<SmolStr>, duration: Duration) -> Self {
        Self {
            idle: idle.into(),
            active: active.into(),
            duration,
            until: None,
        }
    }

    /// Show the active text starting at `now`, restarting any running period.
    pub fn trigger(&mut self, now: Instant) -> Instant {
        let until = now + self.duration;
        self.until = Some(until);
        until
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|u| now < u)
    }

    pub fn text(&self, now: Instant) -> &str {
        if self.is_active(now) {
            &self.active
        } else {
            &self.idle
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until
            .filter(|u| now < *u)
            .map(|u| u.saturating_duration_since(now))
    }

    pub fn reset(&mut self) {
        self.until = None;
    }
}
