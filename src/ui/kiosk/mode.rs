// SPDX-License-Identifier: MPL-2.0
//! Kiosk mode state machine.
//!
//! ```text
//!            enable()                      announce delay elapses
//! Disabled ───────────▶ Enabled ─────────────────────────────────▶ notification.show()
//!     ▲                    │
//!     └────── disable() ───┘  (hides the notification, cancels a pending announce)
//! ```

use crate::ui::notifications::ExpiringNotification;
use crate::ui::state::observer::{ListenerId, Listeners};
use crate::ui::state::timer::{self, TimerHandle};
use std::time::{Duration, Instant};

/// Current kiosk mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Disabled,
    Enabled,
}

/// Changes published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KioskEvent {
    /// Kiosk mode switched on (`true`) or off (`false`).
    ModeToggled(bool),
    NotificationShown,
    NotificationHidden,
}

/// Kiosk mode state shared by the dashboard views.
#[derive(Debug)]
pub struct KioskMode {
    mode: Mode,
    announce_delay: Duration,
    announce: Option<TimerHandle>,
    notification: ExpiringNotification,
    listeners: Listeners<KioskEvent>,
}

impl KioskMode {
    /// Creates a disabled kiosk mode.
    #[must_use]
    pub fn new(announce_delay: Duration, notification_hide_after: Duration) -> Self {
        Self {
            mode: Mode::Disabled,
            announce_delay,
            announce: None,
            notification: ExpiringNotification::new(notification_hide_after),
            listeners: Listeners::new(),
        }
    }

    /// Registers a listener called synchronously on every change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&KioskEvent) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Switches kiosk mode on and schedules the announcement.
    ///
    /// Has no effect when already enabled.
    pub fn enable(&mut self, now: Instant) {
        if self.mode == Mode::Enabled {
            return;
        }
        self.mode = Mode::Enabled;
        self.announce = Some(TimerHandle::start(now, self.announce_delay));
        self.listeners.notify(&KioskEvent::ModeToggled(true));
    }

    /// Switches kiosk mode off and hides the notification immediately.
    ///
    /// Has no effect when already disabled. Unlike a fire-and-forget delay, a
    /// pending announcement is cancelled too, so enabling and disabling
    /// within the announce delay never shows the banner.
    pub fn disable(&mut self) {
        if self.mode == Mode::Disabled {
            return;
        }
        self.mode = Mode::Disabled;
        // An announcement still pending would otherwise show after disabling.
        self.announce = None;
        self.listeners.notify(&KioskEvent::ModeToggled(false));
        self.hide_notification();
    }

    pub fn toggle(&mut self, now: Instant) {
        match self.mode {
            Mode::Disabled => self.enable(now),
            Mode::Enabled => self.disable(),
        }
    }

    /// Shows the notification and restarts its auto-hide countdown.
    pub fn show_notification(&mut self, now: Instant) {
        self.notification.show(now);
        self.listeners.notify(&KioskEvent::NotificationShown);
    }

    /// Hides the notification and cancels its countdown.
    pub fn hide_notification(&mut self) {
        self.notification.hide();
        self.listeners.notify(&KioskEvent::NotificationHidden);
    }

    /// Escape key handling.
    ///
    /// Leaves kiosk mode when enabled, then hides the notification if it is
    /// still visible. Both checks run on every press.
    pub fn on_escape(&mut self) {
        if self.is_enabled() {
            self.disable();
        }
        if self.is_notification_visible() {
            self.hide_notification();
        }
    }

    /// Fires due timers.
    ///
    /// A late announcement shows the notification as of its own deadline, so
    /// the auto-hide countdown does not drift with tick granularity. When the
    /// tick is so late that this countdown would already be over, the
    /// countdown starts at `now` instead and the banner still gets its full
    /// display time.
    pub fn tick(&mut self, now: Instant) {
        if let Some(announce) = timer::take_due(&mut self.announce, now) {
            let shown_at = announce.deadline();
            let hides_at = shown_at + self.notification.hide_after();
            self.show_notification(if hides_at > now { shown_at } else { now });
        }
        if self.notification.tick(now) {
            self.listeners.notify(&KioskEvent::NotificationHidden);
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.mode == Mode::Enabled
    }

    #[must_use]
    pub fn is_notification_visible(&self) -> bool {
        self.notification.is_visible()
    }

    #[must_use]
    pub fn notification(&self) -> &ExpiringNotification {
        &self.notification
    }

    /// Returns whether any timer still needs ticking.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.announce.is_some() || self.notification.has_pending_timer()
    }

    #[must_use]
    pub fn is_announce_pending(&self) -> bool {
        self.announce.is_some()
    }

    /// Applies new timings; running timers keep their deadlines.
    pub fn set_timings(&mut self, announce_delay: Duration, notification_hide_after: Duration) {
        self.announce_delay = announce_delay;
        self.notification.set_hide_after(notification_hide_after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn kiosk() -> KioskMode {
        KioskMode::new(ms(100), ms(3000))
    }

    fn recorder(kiosk: &mut KioskMode) -> Arc<Mutex<Vec<KioskEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        kiosk.subscribe(move |event| sink.lock().unwrap().push(*event));
        events
    }

    #[test]
    fn starts_disabled_and_hidden() {
        let kiosk = kiosk();
        assert_eq!(kiosk.mode(), Mode::Disabled);
        assert!(!kiosk.is_notification_visible());
        assert!(!kiosk.has_pending_timers());
    }

    #[test]
    fn enable_announces_after_delay_and_auto_hides() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();

        kiosk.enable(t0);
        assert!(kiosk.is_enabled());
        assert!(!kiosk.is_notification_visible());

        kiosk.tick(t0 + ms(99));
        assert!(!kiosk.is_notification_visible());

        kiosk.tick(t0 + ms(100));
        assert!(kiosk.is_notification_visible());

        kiosk.tick(t0 + ms(3099));
        assert!(kiosk.is_notification_visible());

        kiosk.tick(t0 + ms(3100));
        assert!(!kiosk.is_notification_visible());
        assert!(kiosk.is_enabled());
        assert!(!kiosk.has_pending_timers());
    }

    #[test]
    fn late_tick_measures_countdown_from_announce_deadline() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        kiosk.enable(t0);

        kiosk.tick(t0 + ms(150));
        let deadline = kiosk.notification().pending_timer().map(TimerHandle::deadline);
        assert_eq!(deadline, Some(t0 + ms(3100)));
    }

    #[test]
    fn stalled_first_tick_still_shows_full_countdown() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        let events = recorder(&mut kiosk);
        kiosk.enable(t0);

        kiosk.tick(t0 + ms(3200));
        assert!(kiosk.is_notification_visible());
        assert_eq!(
            *events.lock().unwrap(),
            vec![KioskEvent::ModeToggled(true), KioskEvent::NotificationShown]
        );

        kiosk.tick(t0 + ms(6199));
        assert!(kiosk.is_notification_visible());
        kiosk.tick(t0 + ms(6200));
        assert!(!kiosk.is_notification_visible());
    }

    #[test]
    fn disable_hides_immediately() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        kiosk.enable(t0);
        kiosk.tick(t0 + ms(100));
        assert!(kiosk.is_notification_visible());

        kiosk.disable();
        assert_eq!(kiosk.mode(), Mode::Disabled);
        assert!(!kiosk.is_notification_visible());
        assert!(!kiosk.has_pending_timers());
    }

    #[test]
    fn disable_before_announce_cancels_it() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        kiosk.enable(t0);
        kiosk.disable();

        kiosk.tick(t0 + ms(200));
        assert!(!kiosk.is_notification_visible());
    }

    #[test]
    fn toggle_dispatches_on_mode() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();

        kiosk.toggle(t0);
        assert!(kiosk.is_enabled());
        kiosk.toggle(t0);
        assert!(!kiosk.is_enabled());
    }

    #[test]
    fn enable_twice_keeps_original_announce() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        kiosk.enable(t0);
        kiosk.enable(t0 + ms(80));

        kiosk.tick(t0 + ms(100));
        assert!(kiosk.is_notification_visible());
    }

    #[test]
    fn escape_leaves_kiosk_mode_and_hides_notification() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        kiosk.enable(t0);
        kiosk.tick(t0 + ms(100));

        kiosk.on_escape();
        assert!(!kiosk.is_enabled());
        assert!(!kiosk.is_notification_visible());
    }

    #[test]
    fn escape_hides_notification_even_when_disabled() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        kiosk.show_notification(t0);

        kiosk.on_escape();
        assert!(!kiosk.is_enabled());
        assert!(!kiosk.is_notification_visible());
    }

    #[test]
    fn listeners_observe_transitions_in_order() {
        let t0 = Instant::now();
        let mut kiosk = kiosk();
        let events = recorder(&mut kiosk);

        kiosk.enable(t0);
        kiosk.tick(t0 + ms(100));
        kiosk.tick(t0 + ms(3100));
        kiosk.disable();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                KioskEvent::ModeToggled(true),
                KioskEvent::NotificationShown,
                KioskEvent::NotificationHidden,
                KioskEvent::ModeToggled(false),
                KioskEvent::NotificationHidden,
            ]
        );
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut kiosk = kiosk();
        let events = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&events);
        let id = kiosk.subscribe(move |_| *sink.lock().unwrap() += 1);
        assert!(kiosk.unsubscribe(id));

        kiosk.enable(Instant::now());
        assert_eq!(*events.lock().unwrap(), 0);
    }
}
