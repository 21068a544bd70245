// SPDX-License-Identifier: MPL-2.0
//! Time-based tween for animated track moves.
//!
//! The animator plays the role of the rendering layer's transition: the host
//! samples it on every animation frame, and the first sample reporting
//! `finished` is the transition-end signal for the engine. Sampling after that
//! yields nothing, so the signal fires exactly once per animated move.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Timing curve of a tween, selectable per carousel with `easing = "..."`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    #[default]
    Ease,
    /// Quadratic ease-out.
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let bezier = |a: f32, b: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };
    let derivative = |a: f32, b: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * a + 6.0 * u * t * (b - a) + 3.0 * t * t * (1.0 - b)
    };

    // Newton first, bisection if the slope gets too flat.
    let mut t = x;
    for _ in 0..8 {
        let error = bezier(x1, x2, t) - x;
        if error.abs() < 1e-5 {
            return bezier(y1, y2, t);
        }
        let slope = derivative(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = bezier(x1, x2, t);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    bezier(y1, y2, t)
}

/// One sample of a running tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Offset to draw, in percent of the container width.
    pub offset: f32,
    /// `true` on the sample that reaches the target.
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Drives the track offset between two positions.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionAnimator {
    active: Option<Tween>,
    duration: Duration,
    easing: Easing,
}

impl TransitionAnimator {
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            active: None,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a tween, replacing any running one.
    pub fn start(&mut self, from: f32, to: f32, now: Instant) {
        self.active = Some(Tween {
            from,
            to,
            started_at: now,
        });
    }

    /// Samples the tween at `now`; `None` when idle.
    pub fn sample(&mut self, now: Instant) -> Option<TransitionFrame> {
        let tween = self.active?;
        let elapsed = now.saturating_duration_since(tween.started_at);

        if elapsed >= self.duration {
            self.active = None;
            return Some(TransitionFrame {
                offset: tween.to,
                finished: true,
            });
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Some(TransitionFrame {
            offset: tween.from + (tween.to - tween.from) * eased,
            finished: false,
        })
    }

    /// Jumps to the end of the running tween; returns its target if any.
    pub fn finish(&mut self) -> Option<f32> {
        self.active.take().map(|tween| tween.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> TransitionAnimator {
        TransitionAnimator::new(Duration::from_millis(500), Easing::Linear)
    }

    #[test]
    fn idle_animator_yields_nothing() {
        let mut animator = animator();
        assert!(!animator.is_active());
        assert_eq!(animator.sample(Instant::now()), None);
    }

    #[test]
    fn linear_tween_interpolates() {
        let start = Instant::now();
        let mut animator = animator();
        animator.start(0.0, -100.0, start);

        let frame = animator
            .sample(start + Duration::from_millis(250))
            .expect("running");
        assert!(!frame.finished);
        assert!((frame.offset + 50.0).abs() < 1e-3);
    }

    #[test]
    fn finished_fires_exactly_once() {
        let start = Instant::now();
        let mut animator = animator();
        animator.start(-100.0, -133.0, start);

        let end = start + Duration::from_millis(600);
        let frame = animator.sample(end).expect("running");
        assert!(frame.finished);
        assert!((frame.offset + 133.0).abs() < f32::EPSILON);
        assert_eq!(animator.sample(end), None);
    }

    #[test]
    fn finish_returns_target() {
        let mut animator = animator();
        animator.start(0.0, -50.0, Instant::now());
        assert_eq!(animator.finish(), Some(-50.0));
        assert!(!animator.is_active());
        assert_eq!(animator.finish(), None);
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseOut] {
            assert!(easing.apply(0.0).abs() < 1e-3, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-3, "{easing:?}");
        }
    }

    #[test]
    fn css_ease_is_front_loaded() {
        // cubic-bezier(0.25, 0.1, 0.25, 1) passes roughly 0.8 at half time.
        let mid = Easing::Ease.apply(0.5);
        assert!(mid > 0.75 && mid < 0.85, "mid = {mid}");
    }

    #[test]
    fn easing_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = Easing::Ease.apply(step as f32 / 20.0);
            assert!(value >= previous - 1e-4);
            previous = value;
        }
    }
}
