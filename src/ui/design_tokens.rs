// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing, sizes and shadows shared by every screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Overlay and surface alpha levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Header geometry and component sizes
- **Typography**: Font size scale
- **Border**: Border widths
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use kiosk_dash::ui::design_tokens::{palette, opacity, sizing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let header = sizing::HEADER_HEIGHT; // 56px
```

Header sizes are read by the hit-testing geometry as well as the views;
changing one changes where outside clicks are detected.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.46, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.79, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.91, 0.93);

    // Brand colors (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.5, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.36, 0.4, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.28, 0.32, 0.82);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.75;

    /// Dropdowns and cards floating over the dashboard body.
    pub const SURFACE: f32 = 0.97;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the dashboard header bar.
    pub const HEADER_HEIGHT: f32 = 56.0;
    /// Square header buttons (bell, kiosk, avatar).
    pub const HEADER_BUTTON: f32 = 40.0;
    pub const HEADER_NEW_BUTTON_WIDTH: f32 = 96.0;
    pub const SEARCH_WIDTH: f32 = 320.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    pub const SEARCH_PANEL_HEIGHT: f32 = 220.0;
    pub const MENU_WIDTH: f32 = 220.0;
    pub const USER_MENU_HEIGHT: f32 = 120.0;
    pub const NEW_MENU_HEIGHT: f32 = 160.0;
    pub const NOTIFICATIONS_WIDTH: f32 = 300.0;
    pub const NOTIFICATIONS_HEIGHT: f32 = 260.0;

    pub const FORM_WIDTH: f32 = 380.0;
    pub const BANNER_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Screen headings.
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Panel outlines and input fields.
    pub const WIDTH_SM: f32 = 1.0;

    /// Banner accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Header controls must fit inside the bar.
    assert!(sizing::HEADER_BUTTON < sizing::HEADER_HEIGHT);
    assert!(sizing::INPUT_HEIGHT < sizing::HEADER_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
