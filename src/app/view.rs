// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and overlays the config warning banner.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::auth::{self, login, register};
use crate::ui::dashboard;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Severity, Toast};
use iced::widget::{Container, Stack};
use iced::{alignment, Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub login: &'a login::State,
    pub register: &'a register::State,
    pub dashboard: &'a dashboard::State,
    pub window_size: Size,
    /// i18n key of a visible config warning.
    pub config_warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => ctx
            .login
            .view(auth::ViewContext { i18n })
            .map(Message::Login),
        Screen::Register => ctx
            .register
            .view(auth::ViewContext { i18n })
            .map(Message::Register),
        Screen::Dashboard => ctx
            .dashboard
            .view(dashboard::ViewContext {
                i18n,
                window: ctx.window_size,
            })
            .map(Message::Dashboard),
    };

    let Some(key) = ctx.config_warning else {
        return current_view;
    };

    // Bottom-right, clear of the header panels.
    let banner = Container::new(Toast::view(
        i18n.tr(key),
        Severity::Warning,
        Message::DismissConfigWarning,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::MD);

    Stack::new()
        .push(current_view)
        .push(banner)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
