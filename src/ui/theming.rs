// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors that differ between light and dark mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_raised: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub brand: Color,
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            surface_raised: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_muted: palette::GRAY_400,
            brand: palette::PRIMARY_500,
            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            surface_raised: Color::from_rgb(0.16, 0.17, 0.2),
            text_primary: palette::WHITE,
            text_muted: palette::GRAY_200,
            brand: palette::PRIMARY_400,
            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Picks the scheme matching the effective mode of `theme`.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// The iced theme for this mode.
    ///
    /// System mode asks the desktop; detection failures fall back to dark.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Theme::Light,
                _ => Theme::Dark,
            },
        }
    }
}
