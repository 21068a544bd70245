// SPDX-License-Identifier: MPL-2.0
//! Carousel domain: render sequence, position engine, timing primitives.
//!
//! Nothing in this module touches the renderer. The UI component in
//! [`crate::ui::carousel`] owns one [`CarouselEngine`] per instance and feeds
//! it navigation requests, resize notifications and transition-end signals.
//!
//! # Architecture
//!
//! - [`RenderSequence`]: real slides framed by leading/trailing clones
//! - [`CarouselEngine`]: position index, single-flight guard, loop correction
//! - [`SlidesPerView`]: responsive breakpoints and offset math
//! - [`AutoplayTimer`]: cancellable repeating deadline
//! - [`TransitionAnimator`]: time-based tween that emits the transition end
//! - [`CarouselOptions`]: per-instance configuration

pub mod autoplay;
pub mod engine;
pub mod layout;
pub mod options;
pub mod sequence;
pub mod transition;

pub use autoplay::AutoplayTimer;
pub use engine::{CarouselEngine, Motion, Settle};
pub use layout::{LayoutDirection, SlidesPerView};
pub use options::{CarouselOptions, CornerRadius};
pub use sequence::{RenderSequence, SlideEntry};
pub use transition::{Easing, TransitionAnimator, TransitionFrame};
