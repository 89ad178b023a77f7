// SPDX-License-Identifier: MPL-2.0
//! `iced_alert` is a modal alert component for the Iced GUI framework.
//!
//! An alert is a rounded card centered over a dimmed backdrop, with an
//! optional icon, a title, an optional scrollable message and a row of
//! actions. It springs into place when presented and drops away when an
//! action is tapped. The crate also ships a small demo host showing the
//! component in a window.

#![doc(html_root_url = "https://docs.rs/iced_alert/0.1.0")]

pub mod alert;
pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
