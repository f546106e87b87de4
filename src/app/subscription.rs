// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer, resize and Escape events are routed regardless of whether a
//! widget captured them: outside-click detection must see every press.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Window-level events the application reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Periodic tick for kiosk, notification and form timers.
///
/// Only active while a timer is pending.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
