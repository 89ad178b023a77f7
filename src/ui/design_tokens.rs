// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the visual constants of the alert component and the demo
host, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_alert::ui::design_tokens::{opacity, palette};
use iced::Color;

// Dimmed backdrop behind an alert
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BACKDROP
};
assert!(backdrop.a < 1.0);
```
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Alert colors
    /// Dimming layer behind the alert surface.
    pub const BACKDROP: Color = Color::from_rgb(0.333, 0.333, 0.333);
    /// Text of normal and emphasized actions.
    pub const ACTION_ACCENT: Color = Color::from_rgb(0.2431, 0.4667, 0.6667);
    /// Text of cancel actions.
    pub const ACTION_CANCEL: Color = Color::from_rgb(0.5569, 0.5569, 0.5765);
    /// Hairline drawn above every action.
    pub const SEPARATOR: Color = Color::from_rgb(0.7843, 0.7804, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Pressed action highlight; hover uses half of it.
    pub const OVERLAY_SUBTLE: f32 = 0.2;

    /// Default backdrop dimming.
    pub const BACKDROP: f32 = 0.3;
    /// Action separator hairline.
    pub const SEPARATOR: f32 = 0.4;
    /// Alert surface drop shadow.
    pub const SHADOW: f32 = 0.2;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const SM: f32 = 12.0; // 1.5 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of a single action button.
    pub const ACTION_HEIGHT: f32 = 50.0;
    /// Thickness of the separator drawn above each action.
    pub const SEPARATOR_HEIGHT: f32 = 1.0;
    /// Alert width on viewports wider than a phone.
    pub const ALERT_WIDTH: f32 = 280.0;
    /// Side length of the icon generated by the demo host.
    pub const DEMO_ICON: f32 = 100.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes for the alert's text hierarchy.

    /// Alert title (bold).
    pub const ALERT_TITLE: f32 = 17.0;

    /// Action labels.
    pub const ACTION: f32 = 17.0;

    /// Alert message body.
    pub const ALERT_MESSAGE: f32 = 14.0;

    /// Demo host headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body text of the demo host.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Default alert surface corner radius.
    pub const ALERT: f32 = 14.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
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

    /// Soft, centered glow around the alert surface.
    pub const ALERT: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector::ZERO,
        blur_radius: 5.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > 0.0);
    assert!(spacing::LG > spacing::SM);

    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::SEPARATOR > 0.0 && opacity::SEPARATOR < 1.0);

    assert!(sizing::ACTION_HEIGHT > sizing::SEPARATOR_HEIGHT);

    assert!(typography::ALERT_TITLE > typography::ALERT_MESSAGE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::LG, spacing::SM * 2.0);
    }

    #[test]
    fn action_colors_are_distinct() {
        assert_ne!(palette::ACTION_ACCENT, palette::ACTION_CANCEL);
    }
}
