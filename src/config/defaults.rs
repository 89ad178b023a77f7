// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used when a setting is missing from `settings.toml`.

use crate::ui::design_tokens::{opacity, radius};

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Default corner radius of the alert surface.
pub const DEFAULT_CORNER_RADIUS: f32 = radius::ALERT;

/// Default backdrop opacity (0.0 to 1.0).
pub const DEFAULT_BACKDROP_OPACITY: f32 = opacity::BACKDROP;

/// Minimum backdrop opacity.
pub const MIN_BACKDROP_OPACITY: f32 = 0.0;

/// Maximum backdrop opacity.
pub const MAX_BACKDROP_OPACITY: f32 = 1.0;

/// Default spacing between actions.
pub const DEFAULT_ACTION_SPACING: f32 = 0.0;

// ==========================================================================
// Behavior Defaults
// ==========================================================================

/// Whether tapping the backdrop dismisses the alert by default.
pub const DEFAULT_CANCELABLE: bool = false;

/// Whether entrance and exit transitions are animated by default.
pub const DEFAULT_ANIMATIONS_ENABLED: bool = true;
