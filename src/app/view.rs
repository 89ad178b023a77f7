// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.

use super::Message;
use crate::alert::{self, Alert};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, column, container, text};
use iced::{Element, Length};

/// Context required to render the host view.
pub struct ViewContext<'a> {
    pub status: &'a str,
    pub alert: Option<&'a Alert<Message>>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = column![
        text("Alerts").size(typography::TITLE_MD),
        trigger("Delete confirmation", Message::ShowConfirmation),
        trigger("Icon with stacked actions", Message::ShowIconAlert),
        trigger("Long message", Message::ShowLongMessage),
        text(ctx.status).size(typography::BODY),
    ]
    .spacing(spacing::SM)
    .width(Length::Fixed(sizing::ALERT_WIDTH));

    let content = center(
        container(controls)
            .padding(spacing::LG)
            .style(styles::container::panel),
    );

    match ctx.alert {
        Some(alert) => alert::modal(content, alert.view().map(Message::Alert)),
        None => content.into(),
    }
}

fn trigger(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY).center().width(Length::Fill))
        .on_press(message)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary)
        .into()
}
