#![forbid(unsafe_code)]

//! Point-to-point linear movement.

use std::time::Duration;

use super::{Animation, Ramp};
use crate::geometry::Point;

/// Moves a point from `start` to `end` over a fixed duration.
///
/// The position at progress `r` is `start + r·(end − start)`, componentwise.
/// Once complete, [`position`](Tween::position) returns `end` exactly, not a
/// float-rounded approximation of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: Point,
    end: Point,
    ramp: Ramp,
}

impl Tween {
    /// Create a tween from `start` to `end` lasting `duration`.
    #[must_use]
    pub fn new(start: Point, end: Point, duration: Duration) -> Self {
        Self {
            start,
            end,
            ramp: Ramp::new(duration),
        }
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.ramp.duration()
    }

    /// Move the destination without restarting. Progress is kept, so the
    /// sampled position jumps onto the new segment.
    pub fn set_end(&mut self, end: Point) {
        self.end = end;
    }

    /// Current interpolated position.
    #[must_use]
    pub fn position(&self) -> Point {
        if self.ramp.is_complete() {
            return self.end;
        }
        self.start.lerp(self.end, self.ramp.value())
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.ramp.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.ramp.is_complete()
    }

    fn value(&self) -> f32 {
        self.ramp.value()
    }

    fn reset(&mut self) {
        self.ramp.reset();
    }

    fn overshoot(&self) -> Duration {
        self.ramp.overshoot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_linear() {
        let mut tween = Tween::new(
            Point::new(0.0, 100.0),
            Point::new(200.0, 0.0),
            Duration::from_millis(100),
        );
        tween.tick(Duration::from_millis(50));
        let p = tween.position();
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!((p.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn completion_lands_exactly_on_end() {
        let end = Point::new(1.0 / 3.0, 7.0 / 9.0);
        let mut tween = Tween::new(Point::new(123.456, -9.87), end, Duration::from_millis(16));
        for _ in 0..3 {
            tween.tick(Duration::from_millis(7));
        }
        assert!(tween.is_complete());
        assert_eq!(tween.position(), end);
    }

    #[test]
    fn retarget_keeps_progress() {
        let mut tween = Tween::new(Point::ZERO, Point::new(100.0, 0.0), Duration::from_millis(100));
        tween.tick(Duration::from_millis(50));
        tween.set_end(Point::new(200.0, 0.0));
        assert!((tween.position().x - 100.0).abs() < 1e-3);
        tween.tick(Duration::from_millis(50));
        assert_eq!(tween.position(), Point::new(200.0, 0.0));
    }

    #[test]
    fn starts_at_start() {
        let tween = Tween::new(Point::new(4.0, 5.0), Point::ZERO, Duration::from_secs(1));
        assert_eq!(tween.position(), Point::new(4.0, 5.0));
        assert_eq!(tween.value(), 0.0);
    }
}
