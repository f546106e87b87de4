// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: header, widget grid, dropdown panels and kiosk banner.

use crate::config::KioskConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::header::{self, NewItem};
use crate::ui::kiosk::{self, KioskMode};
use crate::ui::panels::{Controller, PanelId, Region, Surface};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Stack, Text};
use iced::{Element, Length, Point, Size};
use std::time::Instant;

/// A summary card on the dashboard body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widget {
    pub title_key: &'static str,
    pub value: &'static str,
}

pub const WIDGETS: [Widget; 4] = [
    Widget {
        title_key: "widget-sales",
        value: "$48,210",
    },
    Widget {
        title_key: "widget-visitors",
        value: "12,804",
    },
    Widget {
        title_key: "widget-orders",
        value: "1,375",
    },
    Widget {
        title_key: "widget-uptime",
        value: "99.98%",
    },
];

/// Entries of the notifications tray.
pub const ACTIVITY_KEYS: [&str; 3] = ["activity-deploy", "activity-signup", "activity-report"];

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Kiosk(kiosk::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SignOut,
}

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window: Size,
}

#[derive(Debug)]
pub struct State {
    panels: Controller,
    search_query: String,
    kiosk: KioskMode,
}

impl State {
    #[must_use]
    pub fn new(config: &KioskConfig) -> Self {
        let mut kiosk = KioskMode::new(config.announce_delay(), config.notification_hide_delay());
        kiosk.subscribe(|event| tracing::info!(?event, "kiosk state changed"));

        Self {
            panels: Controller::new(),
            search_query: String::new(),
            kiosk,
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Header(message) => self.handle_header(message, now),
            Message::Kiosk(kiosk::Message::DismissBanner) => {
                self.kiosk.hide_notification();
                Event::None
            }
        }
    }

    fn handle_header(&mut self, message: header::Message, now: Instant) -> Event {
        match message {
            header::Message::SearchChanged(query) => {
                self.search_query = query;
                self.panels.open(PanelId::Search);
                Event::None
            }
            header::Message::TogglePanel(panel) => {
                self.panels.toggle(panel);
                Event::None
            }
            header::Message::ToggleKiosk => {
                self.kiosk.toggle(now);
                // The header and its panels are hidden in kiosk mode.
                if self.kiosk.is_enabled() {
                    PanelId::ALL
                        .into_iter()
                        .for_each(|panel| self.panels.close(panel));
                }
                Event::None
            }
            header::Message::Create(item) => {
                tracing::info!(?item, "create requested");
                self.panels.close(PanelId::New);
                Event::None
            }
            header::Message::OpenProfile => {
                self.panels.close(PanelId::User);
                Event::None
            }
            header::Message::SignOut => {
                self.panels.close(PanelId::User);
                Event::SignOut
            }
        }
    }

    /// Handles a pointer press anywhere in the window.
    ///
    /// Pressing the search box opens the search panel; every open panel the
    /// press falls outside of is dismissed per its policy.
    pub fn on_pointer_pressed(&mut self, target: Point, window: Size) -> Vec<PanelId> {
        if self.kiosk.is_enabled() {
            return Vec::new();
        }
        let regions = header::layout(window);
        if regions.contains(Region::Toggle(PanelId::Search), target) {
            self.panels.open(PanelId::Search);
        }
        self.panels.on_pointer_pressed(target, &regions)
    }

    pub fn on_viewport_resize(&mut self) -> Vec<PanelId> {
        self.panels.on_viewport_resize()
    }

    /// Escape closes one panel and leaves kiosk mode.
    pub fn on_escape(&mut self) -> Option<PanelId> {
        self.kiosk.on_escape();
        self.panels.on_escape()
    }

    pub fn tick(&mut self, now: Instant) {
        self.kiosk.tick(now);
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.kiosk.has_pending_timers()
    }

    #[must_use]
    pub fn panels(&self) -> &Controller {
        &self.panels
    }

    #[must_use]
    pub fn kiosk(&self) -> &KioskMode {
        &self.kiosk
    }

    pub fn kiosk_mut(&mut self) -> &mut KioskMode {
        &mut self.kiosk
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Localized widget titles matching the search query, case-insensitively.
    #[must_use]
    pub fn search_results(&self, i18n: &I18n) -> Vec<String> {
        let query = self.search_query.trim().to_lowercase();
        WIDGETS
            .iter()
            .map(|widget| i18n.tr(widget.title_key))
            .filter(|title| query.is_empty() || title.to_lowercase().contains(&query))
            .collect()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let body = widget_grid(i18n);

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if self.kiosk.is_enabled() {
            layers = layers.push(body);
        } else {
            let header_ctx = header::ViewContext {
                i18n,
                panels: &self.panels,
                search_query: &self.search_query,
                search_results: self.search_results(i18n),
                notifications: ACTIVITY_KEYS.iter().map(|key| i18n.tr(key)).collect(),
                kiosk_enabled: self.kiosk.is_enabled(),
            };
            let page = Column::new()
                .push(header::view(&header_ctx).map(Message::Header))
                .push(body);
            layers = layers.push(page);
            if let Some(panels) = header::panels(&header_ctx, ctx.window) {
                layers = layers.push(panels.map(Message::Header));
            }
        }

        if let Some(banner) = kiosk::banner(&self.kiosk, i18n) {
            layers = layers.push(banner.map(Message::Kiosk));
        }

        layers.into()
    }
}

fn widget_grid<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let cards = WIDGETS.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, widget| {
            let card = Column::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(i18n.tr(widget.title_key))
                        .size(typography::CAPTION)
                        .style(text::secondary),
                )
                .push(Text::new(widget.value).size(typography::TITLE_LG));
            row.push(
                Container::new(card)
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::container::panel),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("dashboard-title")).size(typography::TITLE_LG))
        .push(cards);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Duration;

    const WINDOW: Size = Size {
        width: 1280.0,
        height: 800.0,
    };

    fn state() -> State {
        State::new(&Config::default().kiosk)
    }

    fn center_of(region: Region) -> Point {
        header::layout(WINDOW)
            .bounds(region)
            .map(|bounds| bounds.center())
            .unwrap_or(Point::ORIGIN)
    }

    #[test]
    fn typing_in_search_opens_search_panel() {
        let mut state = state();
        state.update(
            Message::Header(header::Message::SearchChanged("sa".into())),
            Instant::now(),
        );
        assert!(state.panels().is_open(PanelId::Search));
        assert_eq!(state.search_query(), "sa");
    }

    #[test]
    fn pressing_search_box_opens_search_panel() {
        let mut state = state();
        let closed = state.on_pointer_pressed(center_of(Region::Toggle(PanelId::Search)), WINDOW);
        assert!(closed.is_empty());
        assert!(state.panels().is_open(PanelId::Search));
    }

    #[test]
    fn body_click_closes_user_menu_but_not_notifications() {
        let mut state = state();
        let now = Instant::now();
        state.update(Message::Header(header::Message::TogglePanel(PanelId::User)), now);
        state.update(
            Message::Header(header::Message::TogglePanel(PanelId::Notifications)),
            now,
        );

        let closed = state.on_pointer_pressed(Point::new(600.0, 700.0), WINDOW);

        assert_eq!(closed, vec![PanelId::User]);
        assert!(state.panels().is_open(PanelId::Notifications));
    }

    #[test]
    fn click_inside_user_menu_keeps_it_open() {
        let mut state = state();
        state.update(
            Message::Header(header::Message::TogglePanel(PanelId::User)),
            Instant::now(),
        );
        state.on_pointer_pressed(center_of(Region::Panel(PanelId::User)), WINDOW);
        assert!(state.panels().is_open(PanelId::User));
    }

    #[test]
    fn sign_out_closes_menu_and_reports_event() {
        let mut state = state();
        let now = Instant::now();
        state.update(Message::Header(header::Message::TogglePanel(PanelId::User)), now);

        let event = state.update(Message::Header(header::Message::SignOut), now);

        assert_eq!(event, Event::SignOut);
        assert!(!state.panels().is_open(PanelId::User));
    }

    #[test]
    fn create_closes_new_menu() {
        let mut state = state();
        let now = Instant::now();
        state.update(Message::Header(header::Message::TogglePanel(PanelId::New)), now);
        state.update(Message::Header(header::Message::Create(NewItem::Report)), now);
        assert!(!state.panels().is_open(PanelId::New));
    }

    #[test]
    fn kiosk_toggle_and_banner_dismiss() {
        let t0 = Instant::now();
        let mut state = state();
        state.update(Message::Header(header::Message::ToggleKiosk), t0);
        assert!(state.kiosk().is_enabled());
        assert!(state.has_pending_timers());

        state.tick(t0 + Duration::from_millis(100));
        assert!(state.kiosk().is_notification_visible());

        state.update(Message::Kiosk(kiosk::Message::DismissBanner), t0);
        assert!(!state.kiosk().is_notification_visible());
        assert!(state.kiosk().is_enabled());
    }

    #[test]
    fn escape_leaves_kiosk_and_closes_a_panel() {
        let now = Instant::now();
        let mut state = state();
        state.update(Message::Header(header::Message::TogglePanel(PanelId::New)), now);
        state.kiosk_mut().enable(now);

        assert_eq!(state.on_escape(), Some(PanelId::New));
        assert!(!state.kiosk().is_enabled());
    }

    #[test]
    fn search_results_filter_case_insensitively() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let mut state = state();
        assert_eq!(state.search_results(&i18n).len(), WIDGETS.len());

        state.update(
            Message::Header(header::Message::SearchChanged("SALES".into())),
            Instant::now(),
        );
        assert_eq!(state.search_results(&i18n), vec![i18n.tr("widget-sales")]);
    }

    #[test]
    fn view_renders_in_both_modes() {
        let i18n = I18n::default();
        let mut state = state();
        {
            let _normal = state.view(ViewContext {
                i18n: &i18n,
                window: WINDOW,
            });
        }
        state.kiosk_mut().enable(Instant::now());
        let _kiosk = state.view(ViewContext {
            i18n: &i18n,
            window: WINDOW,
        });
    }
}
