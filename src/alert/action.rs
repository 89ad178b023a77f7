// SPDX-License-Identifier: MPL-2.0
//! A single tappable choice of an alert.
//!
//! An [`Action`] carries its label, visual style and the host message to
//! publish when it is activated. It never dismisses anything itself: the
//! owning [`Alert`](super::Alert) routes presses and runs the dismiss
//! sequence.

use super::Message;
use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, container, text, Stack};
use iced::{Color, Element, Font, Length};

/// Visual preset of an action, applied once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    /// Accent-colored, regular weight.
    #[default]
    Normal,
    /// Muted, regular weight.
    Cancel,
    /// Accent-colored, bold.
    Emphasized,
}

impl ActionStyle {
    /// Default text color for this style.
    #[must_use]
    pub fn text_color(self) -> Color {
        match self {
            ActionStyle::Normal | ActionStyle::Emphasized => palette::ACTION_ACCENT,
            ActionStyle::Cancel => palette::ACTION_CANCEL,
        }
    }

    /// Default font for this style.
    #[must_use]
    pub fn font(self) -> Font {
        match self {
            ActionStyle::Normal | ActionStyle::Cancel => Font::DEFAULT,
            ActionStyle::Emphasized => Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            },
        }
    }
}

/// A labeled button of an alert.
///
/// `M` is the host's message type; `on_activate` is published exactly once
/// per activation.
#[derive(Debug, Clone)]
pub struct Action<M> {
    text: String,
    style: ActionStyle,
    text_color: Color,
    font: Font,
    background: Option<Color>,
    on_activate: Option<M>,
}

impl<M: Clone> Action<M> {
    /// Creates an action that only dismisses the alert.
    pub fn new(text: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            text: text.into(),
            style,
            text_color: style.text_color(),
            font: style.font(),
            background: None,
            on_activate: None,
        }
    }

    /// Creates an action that publishes `message` before the alert dismisses.
    pub fn with_message(text: impl Into<String>, style: ActionStyle, message: M) -> Self {
        Self {
            on_activate: Some(message),
            ..Self::new(text, style)
        }
    }

    /// Overrides the text color set by the style.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Overrides the font set by the style.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Fills the action's cell with a background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background = color;
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn style(&self) -> ActionStyle {
        self.style
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn font(&self) -> Font {
        self.font
    }

    #[must_use]
    pub fn background_color(&self) -> Option<Color> {
        self.background
    }

    /// Returns the message to publish for one activation, if any.
    #[must_use]
    pub fn activate(&self) -> Option<M> {
        self.on_activate.clone()
    }

    /// Renders the action as the `index`-th cell of the action row.
    ///
    /// The separator sits on top of the button so it spans the full width
    /// without taking part in the button's hit area.
    pub fn view(&self, index: usize) -> Element<'_, Message> {
        let label = text(self.text.as_str())
            .size(typography::ACTION)
            .font(self.font)
            .color(self.text_color)
            .width(Length::Fill)
            .height(Length::Fill)
            .center();

        let cell = button(label)
            .on_press(Message::ActionPressed(index))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::ACTION_HEIGHT))
            .style(styles::button::action(self.text_color, self.background));

        let separator = container(text(""))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::SEPARATOR_HEIGHT))
            .style(styles::container::separator);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::ACTION_HEIGHT))
            .push(cell)
            .push(separator)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum HostMessage {
        Delete,
    }

    #[test]
    fn style_presets_are_applied_at_construction() {
        let normal = Action::<HostMessage>::new("OK", ActionStyle::Normal);
        let cancel = Action::<HostMessage>::new("Cancel", ActionStyle::Cancel);
        let emphasized = Action::<HostMessage>::new("Delete", ActionStyle::Emphasized);

        assert_eq!(normal.text_color(), palette::ACTION_ACCENT);
        assert_eq!(normal.font().weight, Weight::Normal);
        assert_eq!(cancel.text_color(), palette::ACTION_CANCEL);
        assert_eq!(cancel.font().weight, Weight::Normal);
        assert_eq!(emphasized.text_color(), palette::ACTION_ACCENT);
        assert_eq!(emphasized.font().weight, Weight::Bold);
    }

    #[test]
    fn setters_override_style_defaults() {
        let mut action = Action::<HostMessage>::new("OK", ActionStyle::Cancel);
        action.set_text_color(palette::BLACK);
        action.set_font(ActionStyle::Emphasized.font());
        action.set_text("Done");
        action.set_background_color(Some(palette::WHITE));

        assert_eq!(action.text(), "Done");
        assert_eq!(action.text_color(), palette::BLACK);
        assert_eq!(action.font().weight, Weight::Bold);
        assert_eq!(action.background_color(), Some(palette::WHITE));
        assert_eq!(action.style(), ActionStyle::Cancel);
    }

    #[test]
    fn builder_overrides_match_setters() {
        let action = Action::<HostMessage>::new("OK", ActionStyle::Normal)
            .with_text_color(palette::GRAY_900)
            .with_background_color(palette::GRAY_100);

        assert_eq!(action.text_color(), palette::GRAY_900);
        assert_eq!(action.background_color(), Some(palette::GRAY_100));
    }

    #[test]
    fn activate_publishes_stored_message() {
        let action = Action::with_message("Delete", ActionStyle::Emphasized, HostMessage::Delete);
        assert_eq!(action.activate(), Some(HostMessage::Delete));
    }

    #[test]
    fn activate_without_message_is_a_no_op() {
        let action = Action::<HostMessage>::new("Close", ActionStyle::Normal);
        assert_eq!(action.activate(), None);
    }
}
