// SPDX-License-Identifier: MPL-2.0
//! Transient notifications.
//!
//! - [`ExpiringNotification`] - Visibility flag with one auto-hide countdown
//! - [`Toast`] - Banner card rendering a notification message
//!
//! # Usage
//!
//! ```ignore
//! let mut banner = ExpiringNotification::new(Duration::from_secs(3));
//! banner.show(Instant::now());
//!
//! // From the tick subscription:
//! if banner.tick(Instant::now()) {
//!     // just hid itself
//! }
//!
//! // In the view:
//! if banner.is_visible() {
//!     Toast::view(i18n.tr("kiosk-enabled"), Severity::Info, Message::Dismiss);
//! }
//! ```

mod expiring;
mod toast;

pub use expiring::ExpiringNotification;
pub use toast::{Severity, Toast};
