// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::ui::auth::{login, register};
use crate::ui::dashboard;
use iced::Task;
use std::time::Instant;

/// Applies `message` to `app` as if it arrived at `now`.
pub(super) fn update(app: &mut App, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Login(message) => handle_login(app, message, now),
        Message::Register(message) => handle_register(app, message, now),
        Message::Dashboard(message) => {
            if app.dashboard.update(message, now) == dashboard::Event::SignOut {
                tracing::info!("signed out");
                navigate(app, Screen::Login);
            }
        }
        Message::Navigate(screen) => navigate(app, screen),
        Message::DismissConfigWarning => {
            if let Some(warning) = app.config_warning.as_mut() {
                warning.banner.hide();
            }
        }
        Message::CursorMoved(position) => app.cursor = position,
        Message::PointerPressed => {
            if app.screen == Screen::Dashboard {
                let closed = app.dashboard.on_pointer_pressed(app.cursor, app.window_size);
                if !closed.is_empty() {
                    tracing::debug!(?closed, "outside interaction");
                }
            }
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            if app.screen == Screen::Dashboard {
                app.dashboard.on_viewport_resize();
            }
        }
        Message::EscapePressed => {
            if app.screen == Screen::Dashboard {
                app.dashboard.on_escape();
            }
        }
        Message::Tick(instant) => handle_tick(app, instant),
    }
    Task::none()
}

fn handle_login(app: &mut App, message: login::Message, now: Instant) {
    match app.login.update(message, now) {
        login::Event::OpenRegister => navigate(app, Screen::Register),
        login::Event::Submitted(_) | login::Event::None => {}
    }
}

fn handle_register(app: &mut App, message: register::Message, now: Instant) {
    match app.register.update(message, now) {
        register::Event::OpenLogin => navigate(app, Screen::Login),
        register::Event::Submitted(_) | register::Event::None => {}
    }
}

fn handle_tick(app: &mut App, now: Instant) {
    app.dashboard.tick(now);

    if let Some(warning) = app.config_warning.as_mut() {
        warning.banner.tick(now);
    }

    // A completed request only navigates away from the screen that sent it.
    if app.login.tick(now) {
        tracing::info!("login completed");
        if app.screen == Screen::Login {
            navigate(app, Screen::Dashboard);
        }
    }
    if app.register.tick(now) {
        tracing::info!("registration completed");
        if app.screen == Screen::Register {
            navigate(app, Screen::Login);
        }
    }
}

fn navigate(app: &mut App, screen: Screen) {
    if app.screen != screen {
        tracing::info!(from = %app.screen, to = %screen, "navigate");
        app.screen = screen;
    }
}
