// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use crate::alert;
use crate::ui::theming::ThemeMode;
use iced::Size;
use std::fmt;
use std::path::PathBuf;

/// What the user picked in one of the demo alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Delete,
    Archive,
    Share,
    Acknowledge,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Choice::Delete => "Delete",
            Choice::Archive => "Archive",
            Choice::Share => "Share",
            Choice::Acknowledge => "Got it",
        };
        f.write_str(label)
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present the "Delete?" confirmation.
    ShowConfirmation,
    /// Present the icon alert with stacked actions.
    ShowIconAlert,
    /// Present an alert whose message overflows the window.
    ShowLongMessage,
    /// Forwarded to the visible alert.
    Alert(alert::Message),
    /// Published by an alert action.
    Chose(Choice),
    WindowResized(Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Overrides `[general] theme_mode` from the config file.
    pub theme: Option<ThemeMode>,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
    /// Image shown in the icon alert instead of the generated badge.
    pub icon_path: Option<PathBuf>,
}
