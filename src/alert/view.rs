// SPDX-License-Identifier: MPL-2.0
//! Widget tree of the alert: backdrop, surface and its regions.

use super::layout::{ActionAxis, CENTER_Y_OFFSET, PADDING};
use super::{Alert, Message};
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{
    center, container, image, mouse_area, opaque, scrollable, stack, text, Column, Row, Space,
};
use iced::{ContentFit, Element, Length, Padding};

impl<M: Clone> Alert<M> {
    /// Renders the modal layer: the dimming backdrop with the surface centered
    /// on it, shifted by the current translation.
    ///
    /// The layer captures every press; taps outside the surface become
    /// [`Message::BackdropPressed`].
    pub fn view(&self) -> Element<'_, Message> {
        let surface = container(self.view_surface())
            .width(Length::Fixed(self.layout.width))
            .max_height(self.layout.max_height)
            .clip(true)
            .style(styles::container::surface(
                self.background_color,
                self.corner_radius,
            ));

        let backdrop = center(opaque(surface))
            .padding(translation_padding(CENTER_Y_OFFSET + self.offset))
            .style(styles::overlay::backdrop(
                self.backdrop_color,
                self.backdrop_alpha(),
            ));

        opaque(mouse_area(backdrop).on_press(Message::BackdropPressed))
    }

    fn view_surface(&self) -> Element<'_, Message> {
        let layout = &self.layout;
        let mut content = Column::new().width(Length::Fill);

        if let Some(icon) = self.icon.as_ref().filter(|_| layout.icon_height > 0.0) {
            content = content
                .push(Space::new().height(Length::Fixed(layout.icon_top)))
                .push(
                    container(
                        image(icon.handle().clone())
                            .height(Length::Fixed(layout.icon_height))
                            .content_fit(ContentFit::Contain),
                    )
                    .center_x(Length::Fill),
                );
        }

        let title = text(self.title.as_str())
            .size(typography::ALERT_TITLE)
            .color(self.title_color)
            .width(Length::Fill)
            .height(Length::Fixed(layout.title_height))
            .center();

        content = content
            .push(Space::new().height(Length::Fixed(layout.title_top)))
            .push(container(title).padding([0.0, PADDING]).clip(true));

        if let Some(message) = self.message.as_deref() {
            content = content.push(self.view_message(message));
        }

        content = content.push(Space::new().height(Length::Fixed(layout.action_row_top)));

        if !self.actions.is_empty() {
            content = content.push(self.view_actions());
        }

        if layout.surface_scrollable {
            scrollable(content)
                .height(Length::Fixed(layout.height))
                .into()
        } else {
            content.into()
        }
    }

    fn view_message<'a>(&'a self, message: &'a str) -> Element<'a, Message> {
        let height = Length::Fixed(self.layout.message_height);
        let body = text(message)
            .size(typography::ALERT_MESSAGE)
            .color(self.message_color)
            .width(Length::Fill)
            .center();

        if self.layout.message_scrollable {
            container(scrollable(container(body).padding([0.0, PADDING])).height(height))
                .width(Length::Fill)
                .into()
        } else {
            container(body.height(height))
                .padding([0.0, PADDING])
                .width(Length::Fill)
                .into()
        }
    }

    fn view_actions(&self) -> Element<'_, Message> {
        let cells = self
            .actions
            .iter()
            .enumerate()
            .map(|(index, action)| action.view(index));

        match self.axis {
            ActionAxis::Horizontal => Row::with_children(cells)
                .spacing(self.layout.action_spacing)
                .width(Length::Fill)
                .into(),
            ActionAxis::Vertical => Column::with_children(cells)
                .spacing(self.layout.action_spacing)
                .width(Length::Fill)
                .into(),
        }
    }
}

/// Stacks an alert layer over the host's content.
///
/// `layer` is usually `alert.view().map(HostMessage::Alert)`.
pub fn modal<'a, Message: 'a>(
    base: impl Into<Element<'a, Message>>,
    layer: Element<'a, Message>,
) -> Element<'a, Message> {
    stack![base.into(), layer].into()
}

/// Padding that moves centered content down by `dy` (up when negative).
fn translation_padding(dy: f32) -> Padding {
    if dy >= 0.0 {
        Padding {
            top: 2.0 * dy,
            ..Padding::ZERO
        }
    } else {
        Padding {
            bottom: -2.0 * dy,
            ..Padding::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::animation::ENTRANCE_TRANSLATION;
    use crate::alert::{Action, ActionStyle, Icon};
    use iced::Size;

    #[test]
    fn positive_shift_pads_the_top() {
        let padding = translation_padding(100.0);
        assert_eq!(padding.top, 200.0);
        assert_eq!(padding.bottom, 0.0);
    }

    #[test]
    fn negative_shift_pads_the_bottom() {
        let padding = translation_padding(-25.0);
        assert_eq!(padding.top, 0.0);
        assert_eq!(padding.bottom, 50.0);
    }

    #[test]
    fn resting_surface_sits_at_center_after_entrance() {
        let padding = translation_padding(CENTER_Y_OFFSET + ENTRANCE_TRANSLATION);
        assert_eq!(padding, Padding::ZERO);
    }

    #[test]
    fn view_builds_for_every_content_combination() {
        let icon = Icon::from_rgba(1, 1, vec![255; 4]);
        let mut alert = Alert::<()>::new(Some(icon), "Title", Some("Message".into()))
            .with_action(Action::new("A", ActionStyle::Cancel))
            .with_action(Action::new("B", ActionStyle::Emphasized));
        alert.present(Size::new(400.0, 100.0));
        assert!(alert.layout().message_scrollable);
        assert!(alert.layout().surface_scrollable);

        let _ = modal(text("host"), alert.view());

        alert.set_axis(ActionAxis::Vertical);
        alert.set_message(None);
        alert.set_icon(None);
        let _ = modal(text("host"), alert.view());
    }
}
