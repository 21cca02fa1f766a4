#![forbid(unsafe_code)]

//! Time-based animation primitives.
//!
//! Animations here are explicit state, not callbacks: each one records its
//! duration and elapsed time and is advanced by a driver calling
//! [`Animation::tick`] once per frame. Reading the current value is a pure
//! query.
//!
//! # Invariants
//!
//! 1. `value()` is always in [0.0, 1.0] and never decreases between ticks.
//! 2. `is_complete()` becomes true exactly when `value()` reaches 1.0 and
//!    stays true until `reset()`.
//! 3. Interpolation is linear in elapsed time; there is no easing.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns, so the first tick of any length completes.

mod tween;

pub use tween::Tween;

use std::time::Duration;

/// A time-driven animation producing a normalized progress value.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current progress in [0.0, 1.0].
    fn value(&self) -> f32;

    /// Restart from the beginning.
    fn reset(&mut self);

    /// Time by which the last tick overran the end of the animation.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

/// Linear 0.0 → 1.0 progress over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    duration: Duration,
    elapsed: Duration,
}

impl Ramp {
    /// Create a ramp lasting `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: duration.max(Duration::from_nanos(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time advanced so far, capped at the duration.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.min(self.duration)
    }
}

impl Animation for Ramp {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        if self.is_complete() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_linear() {
        let mut ramp = Ramp::new(Duration::from_millis(200));
        assert_eq!(ramp.value(), 0.0);
        ramp.tick(Duration::from_millis(50));
        assert!((ramp.value() - 0.25).abs() < 1e-6);
        ramp.tick(Duration::from_millis(50));
        assert!((ramp.value() - 0.5).abs() < 1e-6);
        assert!(!ramp.is_complete());
    }

    #[test]
    fn ramp_clamps_and_reports_overshoot() {
        let mut ramp = Ramp::new(Duration::from_millis(100));
        ramp.tick(Duration::from_millis(130));
        assert!(ramp.is_complete());
        assert_eq!(ramp.value(), 1.0);
        assert_eq!(ramp.overshoot(), Duration::from_millis(30));
        assert_eq!(ramp.elapsed(), Duration::from_millis(100));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut ramp = Ramp::new(Duration::ZERO);
        assert!(!ramp.is_complete());
        ramp.tick(Duration::from_nanos(1));
        assert!(ramp.is_complete());
    }

    #[test]
    fn reset_restarts() {
        let mut ramp = Ramp::new(Duration::from_millis(10));
        ramp.tick(Duration::from_millis(20));
        ramp.reset();
        assert_eq!(ramp.value(), 0.0);
        assert!(!ramp.is_complete());
    }
}
