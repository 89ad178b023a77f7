// SPDX-License-Identifier: MPL-2.0
//! Shared styling infrastructure.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Style functions for buttons, containers and the backdrop
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;
