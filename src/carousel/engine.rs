// SPDX-License-Identifier: MPL-2.0
//! Position engine for the infinite carousel.
//!
//! The engine tracks which render-sequence entry sits at the leading edge of
//! the viewport. Moves are single-flight: once an animated move starts, every
//! further request is dropped until the rendering layer reports the end of the
//! transition through [`CarouselEngine::on_transition_settled`]. That call is
//! also where the loop illusion happens: landing on a clone triggers an
//! instant snap to the real slide it mirrors.

use super::layout::SlidesPerView;
use super::sequence::RenderSequence;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Request dropped (transition in flight, out of range, or no-op).
    Ignored,
    /// Animated move started; a transition-end signal is now expected.
    Animated { from: usize, to: usize },
    /// Position re-applied without animation.
    Snapped { to: usize },
}

impl Motion {
    #[must_use]
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}

/// Result of a transition-end signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Landed on a real slide; nothing to correct.
    InPlace { at: usize },
    /// Landed on a clone and teleported to the mirrored real slide.
    Wrapped { from: usize, to: usize },
}

impl Settle {
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::InPlace { at } => at,
            Self::Wrapped { to, .. } => to,
        }
    }
}

/// Index/position state machine for one carousel instance.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    sequence: RenderSequence,
    position: usize,
    in_flight: bool,
    slides_per_view: SlidesPerView,
}

impl CarouselEngine {
    /// Creates an engine resting on the first real slide.
    #[must_use]
    pub fn new(sequence: RenderSequence, container_width: f32) -> Self {
        let position = sequence.first_real();
        Self {
            sequence,
            position,
            in_flight: false,
            slides_per_view: SlidesPerView::for_width(container_width),
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &RenderSequence {
        &self.sequence
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn slides_per_view(&self) -> SlidesPerView {
        self.slides_per_view
    }

    /// Moves one slide forward.
    pub fn advance(&mut self) -> Motion {
        let target = self.position + 1;
        self.animate_to(target)
    }

    /// Moves one slide backward.
    pub fn retreat(&mut self) -> Motion {
        // Settled positions never go below K >= 1.
        match self.position.checked_sub(1) {
            Some(target) => self.animate_to(target),
            None => Motion::Ignored,
        }
    }

    /// Moves to a real slide (`0..N`).
    pub fn go_to(&mut self, real_index: usize) -> Motion {
        let Some(target) = self.sequence.position_of(real_index) else {
            log::debug!(
                "ignoring go_to({real_index}) beyond {} slides",
                self.sequence.real_count()
            );
            return Motion::Ignored;
        };
        if target == self.position {
            // No visual change means no transition end would ever arrive.
            return Motion::Ignored;
        }
        self.animate_to(target)
    }

    fn animate_to(&mut self, target: usize) -> Motion {
        if self.in_flight {
            return Motion::Ignored;
        }
        self.in_flight = true;
        let from = self.position;
        self.position = target;
        Motion::Animated { from, to: target }
    }

    /// Handles the end of an animated move.
    ///
    /// Clears the single-flight guard and corrects a landing on either clone
    /// edge. Tolerates spurious calls: without a move in flight the position
    /// is already in the real range and nothing changes.
    pub fn on_transition_settled(&mut self) -> Settle {
        self.in_flight = false;

        let real = self.sequence.real_count();
        let clones = self.sequence.clone_count();
        let from = self.position;

        let to = if from == real + clones {
            Some(self.sequence.first_real())
        } else if from + 1 == clones {
            Some(self.sequence.last_real())
        } else {
            None
        };

        match to {
            Some(to) => {
                self.position = to;
                log::debug!("carousel wrapped from clone {from} to {to}");
                Settle::Wrapped { from, to }
            }
            None => Settle::InPlace { at: from },
        }
    }

    /// Recomputes slides-per-view for a new container width.
    ///
    /// Returns `Motion::Snapped` when the breakpoint changed, meaning the
    /// current position must be re-applied without animation.
    pub fn resize(&mut self, container_width: f32) -> Motion {
        let next = SlidesPerView::for_width(container_width);
        if next == self.slides_per_view {
            return Motion::Ignored;
        }
        log::debug!(
            "slides per view {} -> {} at {container_width}px",
            self.slides_per_view.value(),
            next.value()
        );
        self.slides_per_view = next;
        Motion::Snapped { to: self.position }
    }

    /// Index of the dot to highlight, always in `0..N`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)] // tiny, rem_euclid is non-negative
    pub fn active_dot(&self) -> usize {
        let real = self.sequence.real_count() as isize;
        let relative = self.position as isize - self.sequence.clone_count() as isize;
        relative.rem_euclid(real) as usize
    }

    /// Track offset in percent of the container width for the current position.
    #[must_use]
    pub fn offset_percent(&self) -> f32 {
        self.slides_per_view.offset_percent(self.position)
    }
}
