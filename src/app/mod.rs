// SPDX-License-Identifier: MPL-2.0
//! Demo host: a window with buttons presenting sample alerts.
//!
//! The `App` owns at most one [`Alert`] at a time, forwards alert messages to
//! it, reacts to the choices its actions publish and drops it once it reports
//! [`alert::Event::Dismissed`].

mod message;
mod subscription;
mod view;

pub use message::{Choice, Flags, Message};

use crate::alert::{self, Action, ActionAxis, ActionStyle, Alert, Icon};
use crate::config::{self, Config};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 320;

const LONG_MESSAGE_PARAGRAPHS: usize = 12;

/// Root Iced application state of the demo.
pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    icon_path: Option<PathBuf>,
    window_size: Size,
    alert: Option<Alert<Message>>,
    status: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("window_size", &self.window_size)
            .field("alert", &self.alert.as_ref().map(Alert::title))
            .field("status", &self.status)
            .finish()
    }
}

impl Default for App {
    #[allow(clippy::cast_precision_loss)]
    fn default() -> Self {
        Self {
            config: Config::default(),
            theme_mode: ThemeMode::System,
            icon_path: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            alert: None,
            status: String::from("No alert shown yet"),
        }
    }
}

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir);

        let mut app = App {
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            icon_path: flags.icon_path,
            config,
            ..Self::default()
        };

        if let Some(warning) = warning {
            app.status = format!("Using default settings: {warning}");
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.alert {
            Some(alert) => format!("{} - IcedAlert", alert.title()),
            None => String::from("IcedAlert"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.alert.as_ref())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowConfirmation => self.present(confirmation_alert(&self.config)),
            Message::ShowIconAlert => {
                let icon = self.load_icon();
                self.present(icon_alert(&self.config, icon));
            }
            Message::ShowLongMessage => self.present(long_message_alert(&self.config)),
            Message::Alert(alert_message) => return self.handle_alert_message(alert_message),
            Message::Chose(choice) => {
                log::info!("user chose {choice}");
                self.status = format!("Last choice: {choice}");
            }
            Message::WindowResized(size) => {
                self.window_size = size;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            status: &self.status,
            alert: self.alert.as_ref(),
        })
    }

    /// Shows `alert`, unless one is already visible.
    fn present(&mut self, mut alert: Alert<Message>) {
        if self.alert.is_some() {
            return;
        }
        alert.present(self.window_size);
        self.alert = Some(alert);
    }

    fn handle_alert_message(&mut self, message: alert::Message) -> Task<Message> {
        let Some(alert) = self.alert.as_mut() else {
            return Task::none();
        };

        match alert.update(message) {
            alert::Event::None => Task::none(),
            alert::Event::ActionActivated {
                message: Some(choice),
                ..
            } => self.update(choice),
            alert::Event::ActionActivated {
                index,
                message: None,
            } => {
                let label = alert
                    .actions()
                    .get(index)
                    .map_or_else(String::new, |action| action.text().to_owned());
                self.status = format!("Closed with {label}");
                Task::none()
            }
            alert::Event::Cancelled => {
                self.status = String::from("Cancelled by tapping outside");
                Task::none()
            }
            alert::Event::Dismissed => {
                self.alert = None;
                Task::none()
            }
        }
    }

    /// Icon for the icon alert: the image given on the command line, or a
    /// generated badge when there is none or it fails to load.
    fn load_icon(&self) -> Icon {
        if let Some(path) = &self.icon_path {
            match Icon::from_path(path) {
                Ok(icon) => return icon,
                Err(err) => log::warn!("failed to load icon {}: {err}", path.display()),
            }
        }
        badge_icon()
    }
}

/// "Delete?" confirmation: no icon, actions laid out as configured.
///
/// Scenario builders apply the config after appending actions, since
/// appending resets the action spacing.
fn confirmation_alert(config: &Config) -> Alert<Message> {
    let mut alert = Alert::without_icon(
        "Delete?",
        Some(String::from("This item will be removed permanently.")),
    )
    .with_action(Action::new("Cancel", ActionStyle::Normal))
    .with_action(Action::with_message(
        "Delete",
        ActionStyle::Emphasized,
        Message::Chose(Choice::Delete),
    ));
    alert.apply_config(config);
    alert
}

/// Icon alert without message and three stacked actions.
fn icon_alert(config: &Config, icon: Icon) -> Alert<Message> {
    let mut alert = Alert::new(Some(icon), "What next?", None)
        .with_action(Action::with_message(
            "Archive",
            ActionStyle::Normal,
            Message::Chose(Choice::Archive),
        ))
        .with_action(Action::with_message(
            "Share",
            ActionStyle::Normal,
            Message::Chose(Choice::Share),
        ))
        .with_action(Action::new("Cancel", ActionStyle::Cancel));
    alert.apply_config(config);
    alert.set_axis(ActionAxis::Vertical);
    alert
}

/// Alert whose message is too long for the window and has to scroll.
fn long_message_alert(config: &Config) -> Alert<Message> {
    let paragraph = "Alerts keep their height below the window. When the message does not \
                     fit, its region scrolls while the title and actions stay in place.";
    let message = vec![paragraph; LONG_MESSAGE_PARAGRAPHS].join("\n\n");

    let mut alert = Alert::without_icon("Terms", Some(message)).with_action(Action::with_message(
        "Got it",
        ActionStyle::Emphasized,
        Message::Chose(Choice::Acknowledge),
    ));
    alert.apply_config(config);
    alert.set_cancelable(true);
    alert
}

/// Filled disc in the primary color.
fn badge_icon() -> Icon {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let side = sizing::DEMO_ICON as u32;
    let color = crate::ui::design_tokens::palette::PRIMARY_500.into_rgba8();
    #[allow(clippy::cast_precision_loss)]
    let radius = side as f32 / 2.0;

    let mut pixels = Vec::with_capacity((side * side * 4) as usize);
    for y in 0..side {
        for x in 0..side {
            #[allow(clippy::cast_precision_loss)]
            let (dx, dy) = (x as f32 + 0.5 - radius, y as f32 + 0.5 - radius);
            let inside = dx * dx + dy * dy <= radius * radius;
            pixels.extend_from_slice(&[color[0], color[1], color[2], if inside { 255 } else { 0 }]);
        }
    }

    Icon::from_rgba(side, side, pixels)
}
