// SPDX-License-Identifier: MPL-2.0
//! Backdrop style for the modal layer behind an alert.

use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimming backdrop filling the viewport behind the alert surface.
///
/// `alpha` is the final opacity: the configured backdrop opacity already
/// scaled by the presentation fade.
pub fn backdrop(color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha.clamp(0.0, 1.0),
            ..color
        })),
        ..Default::default()
    }
}
