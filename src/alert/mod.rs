// SPDX-License-Identifier: MPL-2.0
//! Modal alert component.
//!
//! An [`Alert`] is a card centered over a dimmed backdrop showing an optional
//! icon, a title, an optional message and a row (or column) of [`Action`]s.
//! It follows the usual "state down, messages up" pattern:
//!
//! - the host owns the `Alert<M>` and forwards [`Message`]s to [`Alert::update`],
//! - `update` returns an [`Event`] carrying the host message `M` of the
//!   activated action, if any,
//! - [`Alert::view`] renders the modal layer, to be stacked over the host's
//!   own content with [`modal`].
//!
//! # Components
//!
//! - [`action`] - [`Action`] and its [`ActionStyle`] presets
//! - [`layout`] - Pure layout pass producing [`AlertLayout`]
//! - [`animation`] - Spring transitions for entrance and exit
//!
//! # Usage
//!
//! ```ignore
//! use iced_alert::alert::{Action, ActionStyle, Alert};
//!
//! let mut alert = Alert::without_icon("Delete?", Some("This cannot be undone".into()));
//! alert.add_action(Action::new("Cancel", ActionStyle::Cancel));
//! alert.add_action(Action::with_message("Delete", ActionStyle::Emphasized, Message::Delete));
//! alert.present(window_size);
//!
//! // In view():
//! alert::modal(content, alert.view().map(Message::Alert))
//! ```
//!
//! # Lifecycle
//!
//! `Hidden` → [`Alert::present`] → `Entering` → `Presented` → action, backdrop
//! tap or [`Alert::dismiss`] → `Dismissing` → `Dismissed`. The dismiss
//! sequence runs at most once; once [`Event::Dismissed`] is returned the host
//! drops the alert.

pub mod action;
pub mod animation;
pub mod layout;
mod view;

pub use action::{Action, ActionStyle};
pub use layout::{ActionAxis, AlertLayout, LayoutInput};
pub use view::modal;

use crate::config::Config;
use crate::error::Result;
use crate::ui::design_tokens::{opacity, palette, radius, typography};
use animation::{Spring, Transition, ENTRANCE_TRANSLATION, EXIT_TRANSLATION};
use iced::widget::image;
use iced::{event, window, Color, Size, Subscription};
use std::path::Path;
use std::time::Instant;

/// Image shown above the title, with its natural pixel size.
#[derive(Debug, Clone)]
pub struct Icon {
    handle: image::Handle,
    size: Size,
}

impl Icon {
    /// Builds an icon from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let size = Size::new(width as f32, height as f32);
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            size,
        }
    }

    /// Decodes an image file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let rgba = image_rs::open(path.as_ref())?.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba(width, height, rgba.into_raw()))
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Height the icon region takes; zero for degenerate images.
    #[must_use]
    pub fn display_height(&self) -> f32 {
        if self.size.width > 0.0 && self.size.height > 0.0 {
            self.size.height
        } else {
            0.0
        }
    }
}

/// Messages produced by the alert's widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// The action at this index was tapped.
    ActionPressed(usize),
    /// The backdrop outside the surface was tapped.
    BackdropPressed,
    /// Animation frame.
    Frame(Instant),
    /// The hosting window changed size.
    ViewportResized(Size),
}

/// Events propagated to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<M> {
    None,
    /// An action was activated and the dismiss sequence started. Carries the
    /// action's message, if it has one.
    ActionActivated { index: usize, message: Option<M> },
    /// The backdrop was tapped on a cancelable alert; dismissal started.
    Cancelled,
    /// The exit transition finished. The host should drop the alert.
    Dismissed,
}

/// Where the alert is in its presentation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Built but not presented yet.
    Hidden,
    Entering(Transition),
    Presented,
    Dismissing(Transition),
    Dismissed,
}

/// A modal alert publishing host messages of type `M`.
#[derive(Debug, Clone)]
pub struct Alert<M> {
    icon: Option<Icon>,
    title: String,
    message: Option<String>,
    title_color: Color,
    message_color: Color,
    background_color: Color,
    backdrop_color: Color,
    backdrop_opacity: f32,
    corner_radius: f32,
    action_spacing: f32,
    cancelable: bool,
    axis: ActionAxis,
    animations_enabled: bool,
    actions: Vec<Action<M>>,
    viewport: Size,
    phase: Phase,
    /// Translation reached by the last sampled frame.
    offset: f32,
    /// Fade of the backdrop, following the transitions.
    fade: f32,
    layout: AlertLayout,
}

impl<M: Clone> Alert<M> {
    /// Creates an alert. Without an icon or message the corresponding region
    /// collapses to zero height.
    pub fn new(icon: Option<Icon>, title: impl Into<String>, message: Option<String>) -> Self {
        let mut alert = Self {
            icon,
            title: title.into(),
            message,
            title_color: palette::BLACK,
            message_color: palette::BLACK,
            background_color: palette::WHITE,
            backdrop_color: palette::BACKDROP,
            backdrop_opacity: opacity::BACKDROP,
            corner_radius: radius::ALERT,
            action_spacing: 0.0,
            cancelable: false,
            axis: ActionAxis::default(),
            animations_enabled: true,
            actions: Vec::new(),
            viewport: Size::ZERO,
            phase: Phase::Hidden,
            offset: 0.0,
            fade: 0.0,
            layout: AlertLayout::default(),
        };
        alert.relayout();
        alert
    }

    /// Creates an alert without an icon.
    pub fn without_icon(title: impl Into<String>, message: Option<String>) -> Self {
        Self::new(None, title, message)
    }

    /// Applies the defaults from a loaded configuration.
    pub fn apply_config(&mut self, config: &Config) {
        self.corner_radius = config.appearance.corner_radius();
        self.backdrop_opacity = config.appearance.backdrop_opacity();
        self.action_spacing = config.appearance.action_spacing();
        self.cancelable = config.behavior.cancelable();
        self.axis = config.behavior.action_axis();
        self.animations_enabled = config.behavior.animations_enabled();
        self.relayout();
    }

    // -------------------------------------------------------------------------
    // Content and appearance
    // -------------------------------------------------------------------------

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
        self.relayout();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.relayout();
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
        self.relayout();
    }

    pub fn set_title_color(&mut self, color: Color) {
        self.title_color = color;
    }

    pub fn set_message_color(&mut self, color: Color) {
        self.message_color = color;
    }

    /// Background of the alert surface.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    pub fn set_backdrop_color(&mut self, color: Color) {
        self.backdrop_color = color;
    }

    pub fn set_backdrop_opacity(&mut self, opacity: f32) {
        self.backdrop_opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
    }

    /// Spacing between actions. Appending an action resets it to zero.
    pub fn set_action_spacing(&mut self, spacing: f32) {
        self.action_spacing = spacing.max(0.0);
        self.relayout();
    }

    /// Whether tapping the backdrop dismisses the alert.
    pub fn set_cancelable(&mut self, cancelable: bool) {
        self.cancelable = cancelable;
    }

    pub fn set_axis(&mut self, axis: ActionAxis) {
        self.axis = axis;
        self.relayout();
    }

    /// With animations disabled, transitions complete on the next frame.
    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations_enabled = enabled;
    }

    /// Appends an action. Its activation publishes its message and dismisses
    /// the alert.
    pub fn add_action(&mut self, action: Action<M>) {
        self.actions.push(action);
        self.action_spacing = 0.0;
        self.relayout();
    }

    /// Builder form of [`Alert::add_action`].
    #[must_use]
    pub fn with_action(mut self, action: Action<M>) -> Self {
        self.add_action(action);
        self
    }

    /// Builder form of [`Alert::set_axis`].
    #[must_use]
    pub fn with_axis(mut self, axis: ActionAxis) -> Self {
        self.set_axis(axis);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn title_color(&self) -> Color {
        self.title_color
    }

    #[must_use]
    pub fn message_color(&self) -> Color {
        self.message_color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[must_use]
    pub fn backdrop_color(&self) -> Color {
        self.backdrop_color
    }

    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop_opacity
    }

    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    #[must_use]
    pub fn action_spacing(&self) -> f32 {
        self.action_spacing
    }

    #[must_use]
    pub fn is_cancelable(&self) -> bool {
        self.cancelable
    }

    #[must_use]
    pub fn axis(&self) -> ActionAxis {
        self.axis
    }

    #[must_use]
    pub fn actions(&self) -> &[Action<M>] {
        &self.actions
    }

    /// Mutable access to an appended action, for late overrides.
    pub fn action_mut(&mut self, index: usize) -> Option<&mut Action<M>> {
        self.actions.get_mut(index)
    }

    /// Sizes computed by the last layout pass.
    #[must_use]
    pub fn layout(&self) -> &AlertLayout {
        &self.layout
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current vertical translation of the surface relative to its resting
    /// position.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Whether a transition is running and frames are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering(_) | Phase::Dismissing(_))
    }

    /// Whether the dismiss sequence has started or finished.
    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        matches!(self.phase, Phase::Dismissing(_) | Phase::Dismissed)
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Presents the alert in a viewport of the given size and starts the
    /// entrance transition. Presenting twice has no effect.
    pub fn present(&mut self, viewport: Size) {
        self.present_at(viewport, Instant::now());
    }

    fn present_at(&mut self, viewport: Size, now: Instant) {
        if self.phase != Phase::Hidden {
            return;
        }
        self.viewport = viewport;
        self.relayout();
        self.phase = Phase::Entering(Transition::new(
            self.offset,
            ENTRANCE_TRANSLATION,
            self.spring(Spring::ENTRANCE),
            now,
        ));
        log::debug!(
            "presenting alert {:?} ({} actions) in {}x{}",
            self.title,
            self.actions.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Starts the dismiss sequence, as if an action without message had been
    /// tapped. Returns `false` if it already started.
    pub fn dismiss(&mut self) -> bool {
        self.begin_dismiss(Instant::now())
    }

    fn begin_dismiss(&mut self, now: Instant) -> bool {
        if self.is_dismissing() {
            return false;
        }
        self.phase = Phase::Dismissing(Transition::new(
            self.offset,
            EXIT_TRANSLATION,
            self.spring(Spring::EXIT),
            now,
        ));
        log::debug!("dismissing alert {:?}", self.title);
        true
    }

    fn spring(&self, spring: Spring) -> Spring {
        if self.animations_enabled {
            spring
        } else {
            spring.instant()
        }
    }

    /// Processes an alert message and returns the corresponding event.
    pub fn update(&mut self, message: Message) -> Event<M> {
        match message {
            Message::ActionPressed(index) => {
                if self.is_dismissing() || self.phase == Phase::Hidden {
                    return Event::None;
                }
                let Some(action) = self.actions.get(index) else {
                    return Event::None;
                };
                let published = action.activate();
                self.begin_dismiss(Instant::now());
                Event::ActionActivated {
                    index,
                    message: published,
                }
            }
            Message::BackdropPressed => {
                if self.cancelable
                    && self.phase != Phase::Hidden
                    && self.begin_dismiss(Instant::now())
                {
                    Event::Cancelled
                } else {
                    Event::None
                }
            }
            Message::Frame(now) => self.advance(now),
            Message::ViewportResized(size) => {
                self.viewport = size;
                self.relayout();
                log::debug!(
                    "alert viewport resized to {}x{}, ceiling {}",
                    size.width,
                    size.height,
                    self.layout.max_height
                );
                Event::None
            }
        }
    }

    /// Samples the running transition at `now`.
    fn advance(&mut self, now: Instant) -> Event<M> {
        match self.phase {
            Phase::Entering(transition) => {
                self.offset = transition.value_at(now);
                self.fade = transition.elapsed_fraction(now);
                if transition.is_finished(now) {
                    self.phase = Phase::Presented;
                }
                Event::None
            }
            Phase::Dismissing(transition) => {
                self.offset = transition.value_at(now);
                self.fade = self.fade.min(1.0 - transition.elapsed_fraction(now));
                if transition.is_finished(now) {
                    self.phase = Phase::Dismissed;
                    log::debug!("alert {:?} dismissed", self.title);
                    Event::Dismissed
                } else {
                    Event::None
                }
            }
            Phase::Hidden | Phase::Presented | Phase::Dismissed => Event::None,
        }
    }

    /// Effective backdrop alpha: configured opacity scaled by the fade.
    #[must_use]
    pub fn backdrop_alpha(&self) -> f32 {
        self.backdrop_opacity * self.fade.clamp(0.0, 1.0)
    }

    /// Frame ticks while a transition runs, window resizes always.
    pub fn subscription(&self) -> Subscription<Message> {
        let resizes = event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                Some(Message::ViewportResized(size))
            }
            _ => None,
        });

        if self.is_animating() {
            Subscription::batch([resizes, window::frames().map(Message::Frame)])
        } else {
            resizes
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Recomputes region sizes from the current content.
    fn relayout(&mut self) {
        let text_width = layout::content_width(layout::surface_width(self.viewport.width));

        self.layout = layout::compute(&LayoutInput {
            viewport: self.viewport,
            icon_height: self.icon.as_ref().map_or(0.0, Icon::display_height),
            title_height: layout::estimate_text_height(
                &self.title,
                typography::ALERT_TITLE,
                text_width,
                Some(layout::TITLE_MAX_LINES),
            ),
            message_height: self.message.as_deref().map(|message| {
                layout::estimate_text_height(
                    message,
                    typography::ALERT_MESSAGE,
                    text_width,
                    None,
                )
            }),
            action_count: self.actions.len(),
            axis: self.axis,
            action_spacing: self.action_spacing,
        });
    }
}
