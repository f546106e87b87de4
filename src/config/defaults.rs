// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Kiosk**: Notification auto-hide and announce delays
//! - **Auth**: Form validation thresholds and simulated submission time
//! - **Runtime**: Tick interval driving pending timers

// ==========================================================================
// Kiosk Defaults
// ==========================================================================

/// Default auto-hide delay for the kiosk notification (in milliseconds).
pub const DEFAULT_NOTIFICATION_HIDE_MS: u64 = 3000;

/// Minimum notification auto-hide delay (in milliseconds).
pub const MIN_NOTIFICATION_HIDE_MS: u64 = 500;

/// Maximum notification auto-hide delay (in milliseconds).
pub const MAX_NOTIFICATION_HIDE_MS: u64 = 30_000;

/// Default delay between enabling kiosk mode and announcing it (in milliseconds).
pub const DEFAULT_ANNOUNCE_DELAY_MS: u64 = 100;

/// Minimum announce delay (in milliseconds). Zero announces on the next tick.
pub const MIN_ANNOUNCE_DELAY_MS: u64 = 0;

/// Maximum announce delay (in milliseconds).
pub const MAX_ANNOUNCE_DELAY_MS: u64 = 2000;

// ==========================================================================
// Auth Defaults
// ==========================================================================

/// Default minimum password length for login and register forms.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Lowest accepted minimum password length.
pub const MIN_MIN_PASSWORD_LENGTH: usize = 1;

/// Highest accepted minimum password length.
pub const MAX_MIN_PASSWORD_LENGTH: usize = 128;

/// Duration of the simulated submission round-trip (in milliseconds).
pub const SUBMIT_SIMULATION_MS: u64 = 700;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Interval of the tick subscription while any timer is pending (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_HIDE_MS > 0);
    assert!(MAX_NOTIFICATION_HIDE_MS >= MIN_NOTIFICATION_HIDE_MS);
    assert!(DEFAULT_NOTIFICATION_HIDE_MS >= MIN_NOTIFICATION_HIDE_MS);
    assert!(DEFAULT_NOTIFICATION_HIDE_MS <= MAX_NOTIFICATION_HIDE_MS);

    assert!(MAX_ANNOUNCE_DELAY_MS >= MIN_ANNOUNCE_DELAY_MS);
    assert!(DEFAULT_ANNOUNCE_DELAY_MS <= MAX_ANNOUNCE_DELAY_MS);

    assert!(MIN_MIN_PASSWORD_LENGTH > 0);
    assert!(MAX_MIN_PASSWORD_LENGTH >= MIN_MIN_PASSWORD_LENGTH);
    assert!(DEFAULT_MIN_PASSWORD_LENGTH >= MIN_MIN_PASSWORD_LENGTH);
    assert!(DEFAULT_MIN_PASSWORD_LENGTH <= MAX_MIN_PASSWORD_LENGTH);

    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS <= DEFAULT_ANNOUNCE_DELAY_MS);
};
