// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo host.

use super::Message;
use crate::alert::Alert;
use iced::{event, window, Subscription};

/// Window resizes for the host, plus the visible alert's own subscription.
pub fn create(alert: Option<&Alert<Message>>) -> Subscription<Message> {
    let resizes = event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    });

    match alert {
        Some(alert) => Subscription::batch([resizes, alert.subscription().map(Message::Alert)]),
        None => resizes,
    }
}
