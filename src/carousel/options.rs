// SPDX-License-Identifier: MPL-2.0
//! Per-instance carousel options.

use super::layout::LayoutDirection;
use super::transition::Easing;
use crate::config::{
    DEFAULT_AUTOPLAY, DEFAULT_CLONE_COUNT, DEFAULT_DELAY_MS, DEFAULT_GAP_PX, DEFAULT_LIGHTBOX,
    DEFAULT_ROUND_CORNER, DEFAULT_TRANSITION_MS, MAX_DELAY_MS, MIN_DELAY_MS,
};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Corner radius given as a CSS-like length (`"10px"` or a bare number).
///
/// ```
/// use iced_carousel::carousel::CornerRadius;
///
/// let radius: CornerRadius = "12px".parse().unwrap();
/// assert_eq!(radius.pixels(), 12.0);
/// assert!("12em".parse::<CornerRadius>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadius(f32);

impl CornerRadius {
    #[must_use]
    pub fn pixels(self) -> f32 {
        self.0
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self(10.0)
    }
}

impl FromStr for CornerRadius {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        match number.parse::<f32>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Self(value)),
            _ => Err(Error::Config(format!("invalid corner radius: {raw:?}"))),
        }
    }
}

impl fmt::Display for CornerRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Resolved options for one carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOptions {
    pub autoplay: bool,
    /// Autoplay period.
    pub delay: Duration,
    pub lightbox: bool,
    pub round_corner: CornerRadius,
    /// Space between slides in pixels.
    pub gap: f32,
    /// Requested clones per side; clamped against the slide count.
    pub clone_count: usize,
    pub transition: Duration,
    pub easing: Easing,
    pub direction: LayoutDirection,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: DEFAULT_AUTOPLAY,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            lightbox: DEFAULT_LIGHTBOX,
            round_corner: DEFAULT_ROUND_CORNER.parse().unwrap_or_default(),
            gap: DEFAULT_GAP_PX,
            clone_count: DEFAULT_CLONE_COUNT,
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            easing: Easing::default(),
            direction: LayoutDirection::default(),
        }
    }
}

impl CarouselOptions {
    /// Sets the autoplay period, clamped to the supported range.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS));
        self
    }
}
