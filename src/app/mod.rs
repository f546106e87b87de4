// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together localization, configuration and the
//! login, register and dashboard screens, and translates window events into
//! panel dismissal, kiosk and timer updates.

mod message;
pub mod paths;
mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::auth::{login, register};
use crate::ui::dashboard;
use crate::ui::notifications::ExpiringNotification;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// A config problem shown once as a dismissable banner.
#[derive(Debug, Clone)]
struct ConfigWarning {
    key: String,
    banner: ExpiringNotification,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    login: login::State,
    register: register::State,
    dashboard: dashboard::State,
    window_size: Size,
    cursor: Point,
    config_warning: Option<ConfigWarning>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("kiosk", &self.dashboard.kiosk().mode())
            .field("window_size", &self.window_size)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Boot must be `Fn`; every call starts from the same flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the launcher flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let screen = flags
            .route
            .as_deref()
            .map(Screen::resolve)
            .unwrap_or_default();
        tracing::info!(%screen, locale = %i18n.current_locale(), "starting");

        let app = Self::from_config(i18n, &config, screen, config_warning, Instant::now());
        (app, Task::none())
    }

    /// Builds the state from an already loaded configuration.
    ///
    /// `config_warning` is an i18n key shown as a banner from `now` on.
    pub fn from_config(
        i18n: I18n,
        config: &Config,
        screen: Screen,
        config_warning: Option<String>,
        now: Instant,
    ) -> Self {
        let min_password_length = config.auth.min_password_length();

        let config_warning = config_warning.map(|key| {
            let mut banner = ExpiringNotification::new(config.kiosk.notification_hide_delay());
            banner.show(now);
            ConfigWarning { key, banner }
        });

        Self {
            i18n,
            screen,
            theme_mode: config.general.theme_mode,
            login: login::State::new(min_password_length),
            register: register::State::new(min_password_length),
            dashboard: dashboard::State::new(&config.kiosk),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            cursor: Point::ORIGIN,
            config_warning,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.title_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.has_pending_timers()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// Applies `message` as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        update::update(self, message, now)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            login: &self.login,
            register: &self.register,
            dashboard: &self.dashboard,
            window_size: self.window_size,
            config_warning: self
                .config_warning
                .as_ref()
                .filter(|warning| warning.banner.is_visible())
                .map(|warning| warning.key.as_str()),
        })
    }

    /// Returns whether any timer still needs the tick subscription.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.dashboard.has_pending_timers()
            || self.login.is_submitting()
            || self.register.is_submitting()
            || self
                .config_warning
                .as_ref()
                .is_some_and(|warning| warning.banner.has_pending_timer())
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn dashboard(&self) -> &dashboard::State {
        &self.dashboard
    }

    #[must_use]
    pub fn login(&self) -> &login::State {
        &self.login
    }

    #[must_use]
    pub fn register(&self) -> &register::State {
        &self.register
    }

    #[must_use]
    pub fn is_config_warning_visible(&self) -> bool {
        self.config_warning
            .as_ref()
            .is_some_and(|warning| warning.banner.is_visible())
    }
}
