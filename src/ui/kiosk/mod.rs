// SPDX-License-Identifier: MPL-2.0
//! Kiosk mode: a full-screen presentation of the dashboard.
//!
//! Entering kiosk mode hides the header and, shortly after, announces itself
//! with a banner that hides on its own. Escape or the banner's close button
//! leaves the banner; Escape also leaves kiosk mode.

mod mode;

pub use mode::{KioskEvent, KioskMode, Mode};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Severity, Toast};
use iced::widget::Container;
use iced::{alignment, Element, Length};

/// Messages emitted by the kiosk banner.
#[derive(Debug, Clone)]
pub enum Message {
    DismissBanner,
}

/// Renders the kiosk announcement at the top center, or nothing when hidden.
pub fn banner<'a>(kiosk: &KioskMode, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    if !kiosk.is_notification_visible() {
        return None;
    }

    let toast = Toast::view(
        i18n.tr("kiosk-banner"),
        Severity::Info,
        Message::DismissBanner,
    );

    Some(
        Container::new(toast)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into(),
    )
}
