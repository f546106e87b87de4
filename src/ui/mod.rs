// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! owns its `State`, handles its `Message` and reports an `Event` upward.
//!
//! # Screens
//!
//! - [`auth`] - Login and register forms with field validation
//! - [`dashboard`] - Header, widget grid and kiosk presentation
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Timer handles and listener registries
//! - [`panels`] - Open/closed state and dismissal of header panels
//! - [`notifications`] - Auto-hiding notifications and toast rendering
//! - [`kiosk`] - Kiosk mode state machine and banner
//! - [`header`] - Dashboard header geometry and view
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod auth;
pub mod dashboard;
pub mod design_tokens;
pub mod header;
pub mod kiosk;
pub mod notifications;
pub mod panels;
pub mod state;
pub mod styles;
pub mod theming;
