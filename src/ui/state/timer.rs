// SPDX-License-Identifier: MPL-2.0
//! One-shot timer handles driven by the application tick.
//!
//! A [`TimerHandle`] records when it was armed and when it becomes due. It
//! never fires on its own: the owner keeps it in an `Option<TimerHandle>`
//! field and polls it from the tick message. Cancelling a timer means taking
//! the handle out of that field, so a replaced or cleared handle can never
//! fire afterwards.

use std::time::{Duration, Instant};

/// Unique identifier for an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Creates a new unique timer ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TimerId {
    fn default() -> Self {
        Self::new()
    }
}

/// A one-shot timer armed at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: TimerId,
    armed_at: Instant,
    deadline: Instant,
}

impl TimerHandle {
    /// Arms a timer that becomes due `delay` after `now`.
    #[must_use]
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            id: TimerId::new(),
            armed_at: now,
            deadline: now + delay,
        }
    }

    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    #[must_use]
    pub fn armed_at(&self) -> Instant {
        self.armed_at
    }

    /// Instant at which the timer becomes due.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns whether the timer has elapsed at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline, zero once due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Takes the handle out of `slot` if it is due at `now`.
///
/// Leaves a pending, not-yet-due handle untouched.
pub fn take_due(slot: &mut Option<TimerHandle>, now: Instant) -> Option<TimerHandle> {
    if slot.as_ref().is_some_and(|handle| handle.is_due(now)) {
        slot.take()
    } else {
        None
    }
}
