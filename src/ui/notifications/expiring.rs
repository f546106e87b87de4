// SPDX-License-Identifier: MPL-2.0
//! Visibility flag with a single auto-hide timer.
//!
//! `show` makes the notification visible and (re)arms the auto-hide timer;
//! `hide` clears both. The pending timer lives in one `Option<TimerHandle>`
//! so there is never more than one countdown per notification.

use crate::ui::state::timer::{self, TimerHandle, TimerId};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ExpiringNotification {
    visible: bool,
    pending: Option<TimerHandle>,
    hide_after: Duration,
}

impl ExpiringNotification {
    /// Creates a hidden notification that auto-hides `hide_after` each `show`.
    #[must_use]
    pub fn new(hide_after: Duration) -> Self {
        Self {
            visible: false,
            pending: None,
            hide_after,
        }
    }

    /// Makes the notification visible and restarts the countdown from `now`.
    pub fn show(&mut self, now: Instant) -> TimerId {
        if let Some(stale) = self.pending.take() {
            tracing::trace!(timer = ?stale.id(), "auto-hide timer restarted");
        }
        let handle = TimerHandle::start(now, self.hide_after);
        self.visible = true;
        self.pending = Some(handle);
        handle.id()
    }

    /// Hides the notification and cancels any pending countdown.
    ///
    /// Returns whether the notification was visible before the call.
    pub fn hide(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        self.pending = None;
        was_visible
    }

    /// Hides the notification if its countdown has elapsed at `now`.
    ///
    /// Returns `true` when this call performed the auto-hide.
    pub fn tick(&mut self, now: Instant) -> bool {
        if timer::take_due(&mut self.pending, now).is_some() {
            self.hide()
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<&TimerHandle> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    /// Changes the countdown length used by subsequent `show` calls.
    pub fn set_hide_after(&mut self, hide_after: Duration) {
        self.hide_after = hide_after;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_HIDE: Duration = Duration::from_millis(3000);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_notification_is_hidden_without_timer() {
        let notification = ExpiringNotification::new(T_HIDE);
        assert!(!notification.is_visible());
        assert!(!notification.has_pending_timer());
        assert_eq!(notification.hide_after(), T_HIDE);
    }

    #[test]
    fn show_arms_timer_and_tick_hides_after_deadline() {
        let t0 = Instant::now();
        let mut notification = ExpiringNotification::new(T_HIDE);

        notification.show(t0);
        assert!(notification.is_visible());

        assert!(!notification.tick(t0 + ms(2999)));
        assert!(notification.is_visible());

        assert!(notification.tick(t0 + ms(3000)));
        assert!(!notification.is_visible());
        assert!(!notification.has_pending_timer());
    }

    #[test]
    fn second_show_restarts_countdown() {
        let t0 = Instant::now();
        let mut notification = ExpiringNotification::new(T_HIDE);

        let first = notification.show(t0);
        let second = notification.show(t0 + ms(2000));
        assert_ne!(first, second);

        // Past the first deadline, still visible.
        assert!(!notification.tick(t0 + ms(3500)));
        assert!(notification.is_visible());

        assert!(notification.tick(t0 + ms(5000)));
        assert!(!notification.is_visible());
    }

    #[test]
    fn hide_cancels_pending_timer() {
        let t0 = Instant::now();
        let mut notification = ExpiringNotification::new(T_HIDE);

        notification.show(t0);
        assert!(notification.hide());
        assert!(!notification.has_pending_timer());

        // The cancelled timer never fires.
        assert!(!notification.tick(t0 + ms(10_000)));
        assert!(!notification.is_visible());
    }

    #[test]
    fn hide_without_pending_timer_is_noop() {
        let mut notification = ExpiringNotification::new(T_HIDE);
        assert!(!notification.hide());
        assert!(!notification.is_visible());
        assert!(!notification.has_pending_timer());
    }

    #[test]
    fn at_most_one_pending_timer_for_any_call_sequence() {
        let t0 = Instant::now();
        let mut notification = ExpiringNotification::new(T_HIDE);
        let mut seed: u32 = 0x2545_f491;
        let mut elapsed = 0u64;
        let mut live_ids = std::collections::HashSet::new();

        for _ in 0..500 {
            // xorshift keeps the sequence deterministic without extra crates.
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            elapsed += u64::from(seed % 700);
            let now = t0 + ms(elapsed);

            match seed % 3 {
                0 => {
                    live_ids.insert(notification.show(now));
                }
                1 => {
                    notification.hide();
                }
                _ => {
                    notification.tick(now);
                }
            }

            // The only live timer is the one currently held, if any.
            live_ids.retain(|id| notification.pending_timer().map(TimerHandle::id) == Some(*id));
            assert!(live_ids.len() <= 1);
            assert_eq!(notification.has_pending_timer(), notification.is_visible());
        }
    }

    #[test]
    fn set_hide_after_applies_to_next_show() {
        let t0 = Instant::now();
        let mut notification = ExpiringNotification::new(T_HIDE);
        notification.set_hide_after(ms(500));
        notification.show(t0);
        assert!(notification.tick(t0 + ms(500)));
    }
}
