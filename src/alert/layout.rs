// SPDX-License-Identifier: MPL-2.0
//! Layout pass for the alert surface.
//!
//! The surface is a vertical stack: icon, title, message, action row. All
//! sizes are derived from a handful of content flags by [`compute`], a pure
//! function, and fed to the widget tree as fixed lengths. Text heights are
//! estimated with [`estimate_text_height`] since the layout runs before Iced
//! measures anything.

use crate::ui::design_tokens::sizing;
use iced::Size;

/// Horizontal inset of the icon, title and message.
pub const PADDING: f32 = 15.0;

/// Gap between the top of the surface and the icon, when there is one.
pub const ICON_TOP: f32 = 30.0;

/// Gap between the icon region and the title. Also the title's minimum height.
pub const TITLE_TOP: f32 = 20.0;

/// Minimum height of the message region when a message is present.
pub const MESSAGE_MIN_HEIGHT: f32 = 20.0;

/// Gap between the message region and the action row.
pub const ACTION_ROW_TOP: f32 = 8.0;

/// Space kept free between the surface and the viewport edges, in total.
pub const HEIGHT_MARGIN: f32 = 80.0;

/// Resting position of the surface below the viewport center, before the
/// entrance transition lifts it.
pub const CENTER_Y_OFFSET: f32 = 100.0;

/// Viewports at most this wide get a surface spanning all but [`SIDE_INSET`].
pub const COMPACT_VIEWPORT_WIDTH: f32 = 414.0;

/// Total horizontal inset of the surface on compact viewports.
pub const SIDE_INSET: f32 = 60.0;

/// Maximum number of lines the title wraps to.
pub const TITLE_MAX_LINES: usize = 2;

/// Average glyph advance relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;

/// Line height relative to the font size.
const LINE_HEIGHT_RATIO: f32 = 1.3;

/// Direction in which actions are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionAxis {
    /// All actions share a single row, each taking an equal share of the width.
    #[default]
    Horizontal,
    /// Actions are stacked, one per row.
    Vertical,
}

/// Content description fed to the layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    /// Size of the window hosting the alert.
    pub viewport: Size,
    /// Natural height of the icon; zero when there is none.
    pub icon_height: f32,
    /// Measured (or estimated) height of the title text.
    pub title_height: f32,
    /// Measured height of the message text; `None` when there is no message.
    pub message_height: Option<f32>,
    /// Number of actions in the row.
    pub action_count: usize,
    /// Row or column of actions.
    pub axis: ActionAxis,
    /// Spacing between actions.
    pub action_spacing: f32,
}

/// Concrete sizes of every region of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlertLayout {
    pub width: f32,
    /// Maximum surface height: viewport height minus [`HEIGHT_MARGIN`].
    /// Infinite while the viewport is unknown.
    pub max_height: f32,
    pub icon_top: f32,
    pub icon_height: f32,
    pub title_top: f32,
    pub title_height: f32,
    pub message_height: f32,
    /// Whether the message region scrolls instead of growing the surface.
    pub message_scrollable: bool,
    /// Whether the title and actions alone exceed the ceiling, so the whole
    /// surface body scrolls.
    pub surface_scrollable: bool,
    pub action_row_top: f32,
    pub action_row_height: f32,
    pub action_spacing: f32,
    /// Height of the whole surface, never above `max_height`.
    pub height: f32,
}

/// Surface width for a viewport of the given width. An unknown (zero)
/// viewport gets the regular width.
#[must_use]
pub fn surface_width(viewport_width: f32) -> f32 {
    if viewport_width > 0.0 && viewport_width <= COMPACT_VIEWPORT_WIDTH {
        (viewport_width - SIDE_INSET).max(0.0)
    } else {
        sizing::ALERT_WIDTH
    }
}

/// Height ceiling of the surface. Infinite while the viewport is unknown.
#[must_use]
pub fn ceiling(viewport_height: f32) -> f32 {
    if viewport_height > 0.0 {
        (viewport_height - HEIGHT_MARGIN).max(0.0)
    } else {
        f32::INFINITY
    }
}

/// Width available to the title and message inside a surface.
#[must_use]
pub fn content_width(surface_width: f32) -> f32 {
    (surface_width - 2.0 * PADDING).max(0.0)
}

/// Total height of the action row.
///
/// Stacked actions add up; a horizontal row is one action tall however many
/// actions share it. An empty row takes no space.
#[must_use]
pub fn action_row_height(axis: ActionAxis, action_count: usize) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    // action counts are tiny
    let count = action_count as f32;

    match axis {
        ActionAxis::Vertical => sizing::ACTION_HEIGHT * count,
        ActionAxis::Horizontal if action_count == 0 => 0.0,
        ActionAxis::Horizontal => sizing::ACTION_HEIGHT,
    }
}

/// Computes the size of every region of the surface.
///
/// When the content reaches the ceiling the message region scrolls. When the
/// other regions alone exceed it, the icon shrinks first, and the whole body
/// scrolls if the title and actions still do not fit.
#[must_use]
pub fn compute(input: &LayoutInput) -> AlertLayout {
    let width = surface_width(input.viewport.width);
    let max_height = ceiling(input.viewport.height);

    let mut icon_height = if input.icon_height.is_finite() {
        input.icon_height.max(0.0)
    } else {
        0.0
    };
    let title_height = input.title_height.max(TITLE_TOP);
    let natural_message = input
        .message_height
        .map_or(0.0, |height| height.max(MESSAGE_MIN_HEIGHT));
    let action_row_height = action_row_height(input.axis, input.action_count);

    let rest = TITLE_TOP + title_height + ACTION_ROW_TOP + action_row_height;
    let natural_icon = if icon_height > 0.0 {
        ICON_TOP + icon_height
    } else {
        0.0
    };
    let message_scrollable = natural_icon + rest + natural_message >= max_height;

    if natural_icon + rest > max_height {
        icon_height = icon_height.min((max_height - rest - ICON_TOP).max(0.0));
    }
    let icon_top = if icon_height > 0.0 { ICON_TOP } else { 0.0 };
    let surface_scrollable = rest > max_height;
    let fixed = icon_top + icon_height + rest;

    let message_height = if input.message_height.is_none() {
        0.0
    } else if message_scrollable {
        (max_height - fixed).max(0.0)
    } else {
        natural_message
    };

    let height = if message_scrollable || surface_scrollable {
        max_height
    } else {
        fixed + message_height
    };

    AlertLayout {
        width,
        max_height,
        icon_top,
        icon_height,
        title_top: TITLE_TOP,
        title_height,
        message_height,
        message_scrollable,
        surface_scrollable,
        action_row_top: ACTION_ROW_TOP,
        action_row_height,
        action_spacing: input.action_spacing.max(0.0),
        height,
    }
}

/// Estimates the rendered height of wrapped text.
///
/// Uses an average glyph advance, so it is an approximation: good enough to
/// decide when the message must scroll, never used to clip text that fits.
/// Empty text still occupies one line.
#[must_use]
pub fn estimate_text_height(
    text: &str,
    font_size: f32,
    available_width: f32,
    max_lines: Option<usize>,
) -> f32 {
    let glyph = (font_size * GLYPH_WIDTH_RATIO).max(1.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // width / glyph is finite and non-negative
    let per_line = ((available_width / glyph).floor() as usize).max(1);

    let lines: usize = text
        .split('\n')
        .map(|paragraph| paragraph.chars().count().div_ceil(per_line).max(1))
        .sum();
    let lines = max_lines.map_or(lines, |max| lines.min(max.max(1)));

    #[allow(clippy::cast_precision_loss)]
    let height = lines as f32 * font_size * LINE_HEIGHT_RATIO;
    height
}
