// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::auth::{login, register};
use crate::ui::dashboard;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Register(register::Message),
    Dashboard(dashboard::Message),
    Navigate(Screen),
    DismissConfigWarning,
    CursorMoved(Point),
    /// A mouse button went down at the last known cursor position.
    PointerPressed,
    WindowResized(Size),
    EscapePressed,
    /// Periodic tick driving timers while any is pending.
    Tick(Instant),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 format (e.g. `en-US`).
    pub lang: Option<String>,
    /// Initial route such as `/login` or `register`.
    pub route: Option<String>,
}
