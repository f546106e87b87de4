// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Floating surface for dropdown panels and form cards.
///
/// The color is derived from the active Iced `Theme` background with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// The dashboard header bar.
pub fn header_bar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        text_color: Some(colors.text_primary),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Banner with a colored accent border.
pub fn banner(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base;

        container::Style {
            background: Some(Background::Color(base.color)),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            text_color: Some(base.text),
            ..Default::default()
        }
    }
}

/// Round avatar badge.
pub fn avatar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.brand)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn banner_uses_accent_border() {
        let style = banner(palette::INFO_500)(&Theme::Dark);
        assert_eq!(style.border.color, palette::INFO_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn panel_is_slightly_translucent() {
        let style = panel(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("Expected background color"),
        }
    }
}
