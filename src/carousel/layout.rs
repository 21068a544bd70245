// SPDX-License-Identifier: MPL-2.0
//! Responsive layout math for the slide track.
//!
//! Offsets are expressed in percent of the container width so a tween keeps
//! its meaning across frames; conversion to pixels happens at draw time.

use crate::config::{MEDIUM_BREAKPOINT_PX, SLIDE_ASPECT_RATIO, WIDE_BREAKPOINT_PX};
use serde::{Deserialize, Serialize};

/// Horizontal reading direction of the track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    /// Mirrored track: slides flow right to left and the arrow controls swap.
    Rtl,
}

impl LayoutDirection {
    #[must_use]
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Number of slides visible at once, derived from the container width.
///
/// ```
/// use iced_carousel::carousel::SlidesPerView;
///
/// assert_eq!(SlidesPerView::for_width(1200.0).value(), 3);
/// assert_eq!(SlidesPerView::for_width(800.0).value(), 2);
/// assert_eq!(SlidesPerView::for_width(600.0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidesPerView(u8);

impl SlidesPerView {
    #[must_use]
    pub fn for_width(container_width: f32) -> Self {
        if container_width >= WIDE_BREAKPOINT_PX {
            Self(3)
        } else if container_width >= MEDIUM_BREAKPOINT_PX {
            Self(2)
        } else {
            Self(1)
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Share of the container one slide step represents, in percent.
    #[must_use]
    pub fn step_percent(self) -> f32 {
        100.0 / f32::from(self.0)
    }

    /// Track offset for a render-sequence position, in percent.
    ///
    /// Gap spacing is not part of this formula; the track layout owns it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // positions are tiny
    pub fn offset_percent(self, position: usize) -> f32 {
        -(position as f32 * self.step_percent())
    }

    /// Width of one slide for the given container width and gap, in pixels.
    #[must_use]
    pub fn slide_width(self, container_width: f32, gap: f32) -> f32 {
        let per_view = f32::from(self.0);
        ((container_width - (per_view - 1.0) * gap) / per_view).max(0.0)
    }

    /// Converts a percent offset into a pixel shift of the slide strip.
    ///
    /// One step of offset moves the strip by one stride (slide plus gap), so
    /// gapped tracks stay aligned at every position.
    #[must_use]
    pub fn offset_to_pixels(self, offset_percent: f32, container_width: f32, gap: f32) -> f32 {
        let strides = offset_percent / self.step_percent();
        strides * (self.slide_width(container_width, gap) + gap)
    }

    /// Height of one slide for the given slide width (fixed 4:3 frame).
    #[must_use]
    pub fn slide_height(slide_width: f32) -> f32 {
        slide_width / SLIDE_ASPECT_RATIO
    }
}

impl Default for SlidesPerView {
    fn default() -> Self {
        Self(3)
    }
}
