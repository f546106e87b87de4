// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (form submit, New).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => {
            let colors = ColorScheme::for_theme(theme);
            button::Style {
                background: Some(Background::Color(colors.surface_raised)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Borderless text button for in-form navigation links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let brand = ColorScheme::for_theme(theme).brand;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_600,
        _ => brand,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Header icon buttons. `active` highlights the toggle of an open panel.
pub fn header_icon(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let background = match (active, status) {
            (true, _) => Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            })),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                Some(Background::Color(colors.surface_raised))
            }
            (false, _) => None,
        };

        button::Style {
            background,
            text_color: colors.text_primary,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Rows inside dropdown menus.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors.surface_raised))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Close button on banners.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM / 2.0,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_muted() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn active_header_icon_is_highlighted() {
        let idle = header_icon(false)(&Theme::Dark, button::Status::Active);
        let open = header_icon(true)(&Theme::Dark, button::Status::Active);

        assert!(idle.background.is_none());
        assert!(open.background.is_some());
    }

    #[test]
    fn dismiss_is_transparent_until_hovered() {
        let active = dismiss(&Theme::Dark, button::Status::Active);
        let hovered = dismiss(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }
}
