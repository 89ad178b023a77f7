// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for an alert action.
///
/// Actions are flat: the optional background fills the cell, and pressing or
/// hovering lays a translucent gray over it. Corners stay square so the row
/// reads as one strip under the message.
pub fn action(
    text_color: Color,
    background: Option<Color>,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlight = match status {
            button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE / 2.0),
            button::Status::Pressed => Some(opacity::OVERLAY_SUBTLE),
            button::Status::Active | button::Status::Disabled => None,
        };

        let fill = match (background, highlight) {
            (_, Some(alpha)) => Some(Background::Color(Color {
                a: alpha,
                ..palette::GRAY_400
            })),
            (Some(color), None) => Some(Background::Color(color)),
            (None, None) => None,
        };

        button::Style {
            background: fill,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the demo host's trigger buttons.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
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
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
