// SPDX-License-Identifier: MPL-2.0
//! `kiosk_dash` is a dashboard shell built with the Iced GUI framework.
//!
//! It provides login and register screens, a dashboard header whose panels
//! dismiss on outside clicks, resize and Escape, and a kiosk mode that
//! announces itself with an auto-hiding notification.

#![doc(html_root_url = "https://docs.rs/kiosk_dash/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
