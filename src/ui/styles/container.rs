// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The alert surface card: explicit background, rounded corners, soft shadow.
///
/// Colors are not derived from the theme so an alert looks the same in light
/// and dark hosts unless the caller overrides them.
pub fn surface(background: Color, corner_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: corner_radius.max(0.0).into(),
            ..Default::default()
        },
        shadow: shadow::ALERT,
        ..Default::default()
    }
}

/// The hairline pinned to the top edge of every action.
#[must_use]
pub fn separator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SEPARATOR,
            ..palette::SEPARATOR
        })),
        ..Default::default()
    }
}

/// Plain panel used by the demo host around its controls.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: crate::ui::design_tokens::radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
