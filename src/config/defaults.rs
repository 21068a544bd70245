// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Autoplay, lightbox, spacing and looping defaults
//! - **Layout**: Responsive breakpoints and slide geometry
//! - **Timing**: Transition duration and host tick cadence

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Whether carousels advance on their own.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default autoplay period (in milliseconds).
pub const DEFAULT_DELAY_MS: u64 = 3000;

/// Minimum autoplay period (in milliseconds).
pub const MIN_DELAY_MS: u64 = 500;

/// Maximum autoplay period (in milliseconds).
pub const MAX_DELAY_MS: u64 = 60_000;

/// Whether clicking a slide opens the lightbox.
pub const DEFAULT_LIGHTBOX: bool = true;

/// Default slide corner radius, as a CSS-like length.
pub const DEFAULT_ROUND_CORNER: &str = "10px";

/// Default space between slides (in pixels).
pub const DEFAULT_GAP_PX: f32 = 10.0;

/// Maximum space between slides (in pixels).
pub const MAX_GAP_PX: f32 = 200.0;

/// Default number of clones on each end of the track.
pub const DEFAULT_CLONE_COUNT: usize = 3;

/// Maximum number of clones on each end of the track.
pub const MAX_CLONE_COUNT: usize = 8;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Container width from which three slides are shown.
pub const WIDE_BREAKPOINT_PX: f32 = 1024.0;

/// Container width from which two slides are shown.
pub const MEDIUM_BREAKPOINT_PX: f32 = 768.0;

/// Slide frame width divided by height (4:3).
pub const SLIDE_ASPECT_RATIO: f32 = 4.0 / 3.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Duration of an animated track move (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 500;

/// Maximum duration of an animated track move (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5000;

/// How often the host polls autoplay deadlines (in milliseconds).
pub const AUTOPLAY_POLL_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Autoplay validation
    assert!(MIN_DELAY_MS > 0);
    assert!(MAX_DELAY_MS >= MIN_DELAY_MS);
    assert!(DEFAULT_DELAY_MS >= MIN_DELAY_MS);
    assert!(DEFAULT_DELAY_MS <= MAX_DELAY_MS);
    assert!(AUTOPLAY_POLL_MS < MIN_DELAY_MS);

    // Looping validation
    assert!(DEFAULT_CLONE_COUNT >= 1);
    assert!(DEFAULT_CLONE_COUNT <= MAX_CLONE_COUNT);

    // Layout validation
    assert!(MEDIUM_BREAKPOINT_PX < WIDE_BREAKPOINT_PX);
    assert!(DEFAULT_GAP_PX >= 0.0);
    assert!(DEFAULT_GAP_PX <= MAX_GAP_PX);

    // Timing validation
    assert!(DEFAULT_TRANSITION_MS > 0);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
};
