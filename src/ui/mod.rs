// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`carousel`] - The carousel component (state, update, view, lightbox)
//! - [`widgets`] - Custom Iced widgets (slide track)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod carousel;
pub mod design_tokens;
pub mod styles;
pub mod widgets;
