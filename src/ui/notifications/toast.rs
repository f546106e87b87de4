// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering a notification banner.
//!
//! Toasts appear as small cards with a severity-colored accent and a dismiss
//! button. Placement is left to the caller.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

pub struct Toast;

impl Toast {
    /// Renders a banner with `message` and a close button emitting `on_dismiss`.
    pub fn view<'a, Message: Clone + 'a>(
        message: String,
        severity: Severity,
        on_dismiss: Message,
    ) -> Element<'a, Message> {
        let message_widget =
            Text::new(message)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
            .on_press(on_dismiss)
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::BANNER_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::banner(severity.color()))
            .into()
    }
}
