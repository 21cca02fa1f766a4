#![forbid(unsafe_code)]

//! Per-cell position animations, sampled by one driver.
//!
//! [`CellAnimator`] holds at most one running [`Tween`] per cell. Starting a
//! new animation for a cell that already has one replaces it on the spot;
//! there is no queueing and no blending. The grid calls
//! [`tick`](CellAnimator::tick) once per frame and applies the sampled
//! positions.
//!
//! # Invariants
//!
//! 1. At most one animation per [`CellId`].
//! 2. Each animation is reported in [`tick`](CellAnimator::tick)'s completed
//!    list exactly once, on the tick it finishes, and is then removed.
//! 3. A replaced or cancelled animation is never reported.

use std::time::Duration;

use ahash::AHashMap;
use regrid_core::animation::{Animation, Tween};
use regrid_core::geometry::Point;

use crate::cell::CellId;

/// Why a cell is animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Sliding out of the way during a reorder.
    Shift,
    /// The released cell returning to its slot.
    Settle,
}

/// An animation that finished on the last tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completed {
    pub cell: CellId,
    pub kind: AnimationKind,
    /// Final position, equal to the animation's end point.
    pub position: Point,
}

#[derive(Debug, Clone)]
struct Running {
    tween: Tween,
    kind: AnimationKind,
}

/// Driver for all in-flight cell animations.
#[derive(Debug, Clone, Default)]
pub struct CellAnimator {
    running: AHashMap<CellId, Running>,
}

impl CellAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `cell` from `from` to `to`. Returns `true` if an animation
    /// already running for that cell was replaced.
    pub fn start(
        &mut self,
        cell: CellId,
        kind: AnimationKind,
        from: Point,
        to: Point,
        duration: Duration,
    ) -> bool {
        let replaced = self
            .running
            .insert(
                cell,
                Running {
                    tween: Tween::new(from, to, duration),
                    kind,
                },
            )
            .is_some();

        #[cfg(feature = "tracing")]
        if replaced {
            tracing::trace!(message = "animator.replace", cell = cell.get());
        }

        replaced
    }

    /// Drop the animation for `cell` without reporting it.
    pub fn cancel(&mut self, cell: CellId) -> bool {
        self.running.remove(&cell).is_some()
    }

    /// Drop every animation without reporting any.
    pub fn clear(&mut self) {
        self.running.clear();
    }

    /// Point a running animation at a new destination, keeping its progress.
    pub fn retarget(&mut self, cell: CellId, to: Point) -> bool {
        match self.running.get_mut(&cell) {
            Some(run) => {
                run.tween.set_end(to);
                true
            }
            None => false,
        }
    }

    /// Current sample for `cell`, if it is animating.
    #[must_use]
    pub fn position(&self, cell: CellId) -> Option<Point> {
        self.running.get(&cell).map(|r| r.tween.position())
    }

    /// Kind and destination of the running animation for `cell`.
    #[must_use]
    pub fn target(&self, cell: CellId) -> Option<(AnimationKind, Point)> {
        self.running.get(&cell).map(|r| (r.kind, r.tween.end()))
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self, cell: CellId) -> bool {
        self.running.contains_key(&cell)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.running.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// Advance every animation by `dt` and remove the ones that finished.
    ///
    /// Completed animations are returned sorted by cell id.
    pub fn tick(&mut self, dt: Duration) -> Vec<Completed> {
        let mut done = Vec::new();
        for (id, run) in &mut self.running {
            run.tween.tick(dt);
            if run.tween.is_complete() {
                done.push(Completed {
                    cell: *id,
                    kind: run.kind,
                    position: run.tween.end(),
                });
            }
        }
        for c in &done {
            self.running.remove(&c.cell);
        }
        done.sort_by_key(|c| c.cell);
        done
    }
}
