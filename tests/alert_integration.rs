// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_alert::alert::{self, Action, ActionAxis, ActionStyle, Alert, Event, Icon, Message};
use iced_alert::config::{self, AxisSetting, Config};
use iced_alert::error::Error;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq)]
enum Host {
    Delete,
    Archive,
}

const VIEWPORT: Size = Size::new(1024.0, 768.0);

fn settle() -> Message {
    Message::Frame(Instant::now() + Duration::from_secs(1))
}

#[test]
fn delete_confirmation_publishes_then_dismisses() {
    let mut alert = Alert::without_icon("Delete?", Some("This cannot be undone".to_string()))
        .with_action(Action::new("Cancel", ActionStyle::Normal))
        .with_action(Action::with_message(
            "Delete",
            ActionStyle::Emphasized,
            Host::Delete,
        ));
    alert.present(VIEWPORT);

    assert_eq!(alert.axis(), ActionAxis::Horizontal);
    assert_eq!(alert.layout().icon_height, 0.0);
    assert_eq!(alert.layout().action_row_height, 50.0);
    assert!(alert.layout().message_height > 0.0);

    let published = match alert.update(Message::ActionPressed(1)) {
        Event::ActionActivated { message, .. } => message,
        other => panic!("expected ActionActivated, got {other:?}"),
    };
    assert_eq!(published, Some(Host::Delete));

    assert_eq!(alert.update(Message::ActionPressed(1)), Event::None);
    assert_eq!(alert.update(settle()), Event::Dismissed);
    assert_eq!(alert.phase(), alert::Phase::Dismissed);
}

#[test]
fn icon_alert_with_stacked_actions() {
    let icon = Icon::from_rgba(64, 64, vec![128; 64 * 64 * 4]);
    let mut alert = Alert::new(Some(icon), "What next?", None).with_axis(ActionAxis::Vertical);
    alert.add_action(Action::with_message("Archive", ActionStyle::Normal, Host::Archive));
    alert.add_action(Action::new("Share", ActionStyle::Normal));
    alert.add_action(Action::new("Cancel", ActionStyle::Cancel));
    alert.present(VIEWPORT);

    let layout = alert.layout();
    assert_eq!(layout.message_height, 0.0);
    assert_eq!(layout.icon_height, 64.0);
    assert_eq!(layout.action_row_height, 150.0);
    assert_eq!(layout.action_spacing, 0.0);
}

#[test]
fn styles_fix_text_color_and_weight() {
    let cancel = Action::<Host>::new("Cancel", ActionStyle::Cancel);
    let emphasized = Action::<Host>::new("Delete", ActionStyle::Emphasized);

    assert_ne!(cancel.text_color(), emphasized.text_color());
    assert_eq!(emphasized.font().weight, iced::font::Weight::Bold);
}

#[test]
fn backdrop_dismisses_only_cancelable_alerts() {
    let mut alert = Alert::<Host>::without_icon("Notice", None);
    alert.present(VIEWPORT);
    assert_eq!(alert.update(Message::BackdropPressed), Event::None);

    alert.set_cancelable(true);
    assert_eq!(alert.update(Message::BackdropPressed), Event::Cancelled);
    assert_eq!(alert.update(Message::BackdropPressed), Event::None);
    assert_eq!(alert.update(settle()), Event::Dismissed);
}

#[test]
fn surface_never_exceeds_ceiling() {
    let mut alert = Alert::<Host>::without_icon("Terms", Some("Lorem ipsum dolor. ".repeat(300)))
        .with_action(Action::new("OK", ActionStyle::Normal));

    for height in [900.0, 600.0, 300.0, 150.0] {
        alert.update(Message::ViewportResized(Size::new(800.0, height)));
        let layout = alert.layout();
        assert!(layout.message_scrollable, "expected scrolling at height {height}");
        assert!(layout.height <= height - 80.0 + 0.01);
    }
}

#[test]
fn fixed_regions_respect_ceiling() {
    let viewport = Size::new(800.0, 600.0);

    let mut stacked = Alert::<Host>::without_icon("Options", None).with_axis(ActionAxis::Vertical);
    for index in 0..12 {
        stacked.add_action(Action::new(format!("Option {index}"), ActionStyle::Normal));
    }
    stacked.present(viewport);
    assert!(stacked.layout().height <= stacked.layout().max_height);
    assert!(stacked.layout().surface_scrollable);

    let tall_icon = Icon::from_rgba(4, 900, vec![0; 4 * 900 * 4]);
    let mut alert = Alert::<Host>::new(Some(tall_icon), "Big", None)
        .with_action(Action::new("OK", ActionStyle::Normal));
    alert.present(viewport);
    assert!(alert.layout().height <= alert.layout().max_height);
    assert!(alert.layout().icon_height < 900.0);
}

#[test]
fn regions_collapse_only_for_absent_content() {
    let mut bare = Alert::<Host>::without_icon("Title", None);
    bare.present(VIEWPORT);
    assert_eq!(bare.layout().icon_height, 0.0);
    assert_eq!(bare.layout().message_height, 0.0);

    let mut full = Alert::<Host>::new(
        Some(Icon::from_rgba(8, 8, vec![0; 8 * 8 * 4])),
        "Title",
        Some("Body".to_string()),
    );
    full.present(VIEWPORT);
    assert_eq!(full.layout().icon_height, 8.0);
    assert!(full.layout().message_height > 0.0);
}

#[test]
fn config_file_drives_alert_defaults() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut config = Config::default();
    config.behavior.cancelable = Some(true);
    config.behavior.action_axis = Some(AxisSetting::Vertical);
    config.appearance.corner_radius = Some(4.0);
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut alert = Alert::<Host>::without_icon("Title", None)
        .with_action(Action::new("A", ActionStyle::Normal))
        .with_action(Action::new("B", ActionStyle::Normal));
    alert.apply_config(&loaded);

    assert!(alert.is_cancelable());
    assert_eq!(alert.corner_radius(), 4.0);
    assert_eq!(alert.layout().action_row_height, 100.0);
}

#[test]
fn icon_loads_from_png_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("icon.png");
    image_rs::RgbaImage::new(12, 30)
        .save(&path)
        .expect("failed to write png");

    let icon = Icon::from_path(&path).expect("icon should load");
    assert_eq!(icon.size(), Size::new(12.0, 30.0));

    let alert = Alert::<Host>::new(Some(icon), "Title", None);
    assert_eq!(alert.layout().icon_height, 30.0);
}

#[test]
fn corrupt_icon_file_is_an_image_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("icon.png");
    std::fs::write(&path, b"not a png").expect("failed to write file");

    match Icon::from_path(&path) {
        Err(Error::Image(_)) => {}
        other => panic!("expected Image error, got {other:?}"),
    }
}
