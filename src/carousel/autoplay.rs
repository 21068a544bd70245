// SPDX-License-Identifier: MPL-2.0
//! Cancellable repeating timer driving autoplay.
//!
//! The timer only stores a deadline; the host polls it from a periodic tick
//! subscription. Restarting is cancel-then-reschedule: a user interaction
//! pushes the next tick a full period away instead of delaying a pending one.

use std::time::{Duration, Instant};

/// Repeating deadline for autoplay advances.
///
/// # Example
///
/// ```
/// use iced_carousel::carousel::AutoplayTimer;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut timer = AutoplayTimer::new(true, Duration::from_millis(3000));
/// timer.start(start);
///
/// assert!(!timer.poll(start + Duration::from_millis(2999)));
/// assert!(timer.poll(start + Duration::from_millis(3000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    enabled: bool,
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoplayTimer {
    /// Creates a stopped timer. A disabled timer never arms.
    #[must_use]
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            interval,
            deadline: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Arms the timer one period from `now`, replacing any pending deadline.
    pub fn start(&mut self, now: Instant) {
        if !self.enabled {
            return;
        }
        self.deadline = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn restart(&mut self, now: Instant) {
        self.stop();
        self.start(now);
    }

    /// Returns `true` when the deadline has passed and re-arms for the next
    /// period. A host that stalled for several periods gets one tick, not a
    /// burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let next = deadline + self.interval;
        self.deadline = Some(if next <= now { now + self.interval } else { next });
        true
    }
}
