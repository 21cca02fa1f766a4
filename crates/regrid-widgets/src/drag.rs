#![forbid(unsafe_code)]

//! Drag session state and the drag-source callback contract.
//!
//! A drag moves through three phases (see [`GridPhase`]):
//!
//! ```text
//! Idle --long press on a cell--> Dragging --drop / cancel--> Settling --settle done--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one [`DragSession`] exists; a new one can only be created from
//!    [`GridPhase::Idle`].
//! 2. `on_drag_start_preceding` and `on_drag_ended` are each called exactly
//!    once per session, in that order.
//! 3. The grab offset is captured once at drag start and never changes.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Long press outside every cell | Empty trailing slot or header | No session |
//! | Pointer leaves the grid mid-drag | Drag past the edge | Last overlap index kept |
//! | Platform cancel mid-drag | Focus loss | Handled as a drop at the current index |

use regrid_core::geometry::Point;

use crate::cell::CellId;

// ---------------------------------------------------------------------------
// DragSource
// ---------------------------------------------------------------------------

/// Host-side observer of drag lifecycle and taps.
///
/// All methods default to no-ops so hosts implement only what they need.
/// `V` is the adapter's cell view type.
pub trait DragSource<V> {
    /// A drag is starting. Fires after every cell's own start hook.
    fn on_drag_start_preceding(&mut self) {}

    /// The dragged cell finished settling and the session is gone.
    fn on_drag_ended(&mut self) {}

    /// A cell was tapped while no drag was running.
    fn on_click_element(&mut self, _cell: &V) {}
}

/// Any `FnMut(&V)` works as a tap-only drag source.
impl<V, F> DragSource<V> for F
where
    F: FnMut(&V),
{
    fn on_click_element(&mut self, cell: &V) {
        self(cell);
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// How the platform should render the drag image.
///
/// The grid moves the dragged cell itself, so the platform ghost is always
/// suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragShadow {
    #[default]
    Suppressed,
}

/// Opaque payload handed to the host when a drag starts, suitable for
/// carrying through a platform drag-and-drop session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub cell: CellId,
    /// Logical index of the cell when it was picked up.
    pub start_index: usize,
    pub shadow: DragShadow,
}

impl DragPayload {
    #[must_use]
    pub fn new(cell: CellId, start_index: usize) -> Self {
        Self {
            cell,
            start_index,
            shadow: DragShadow::Suppressed,
        }
    }
}

// ---------------------------------------------------------------------------
// Phase / session
// ---------------------------------------------------------------------------

/// Where the grid is in the drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridPhase {
    #[default]
    Idle,
    /// A cell follows the pointer.
    Dragging,
    /// The released cell is animating into its slot.
    Settling,
}

impl GridPhase {
    #[inline]
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// State of the one active drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    cell: CellId,
    start_index: usize,
    /// Pointer position minus the cell origin at pick-up.
    grab_offset: Point,
    last_overlap: Option<usize>,
    reorders: usize,
}

impl DragSession {
    pub(crate) fn new(cell: CellId, start_index: usize, grab_offset: Point) -> Self {
        Self {
            cell,
            start_index,
            grab_offset,
            last_overlap: None,
            reorders: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    #[inline]
    #[must_use]
    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    /// Most recent cell index the pointer was over, if it has been over one.
    #[inline]
    #[must_use]
    pub fn last_overlap(&self) -> Option<usize> {
        self.last_overlap
    }

    /// Number of reorders applied during this session.
    #[inline]
    #[must_use]
    pub fn reorders(&self) -> usize {
        self.reorders
    }

    /// Where the dragged cell's origin goes for a pointer at `pointer`.
    #[must_use]
    pub fn origin_for(&self, pointer: Point) -> Point {
        pointer - self.grab_offset
    }

    /// Record the overlap for this move and report whether it changed.
    ///
    /// `None` (pointer over no cell) keeps the previous overlap and never
    /// counts as a change.
    pub(crate) fn observe_overlap(&mut self, overlap: Option<usize>) -> Option<usize> {
        let next = overlap?;
        if self.last_overlap == Some(next) {
            return None;
        }
        self.last_overlap = Some(next);
        Some(next)
    }

    pub(crate) fn note_reorder(&mut self) {
        self.reorders += 1;
    }

    pub(crate) fn payload(&self) -> DragPayload {
        DragPayload::new(self.cell, self.start_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DragSession {
        DragSession::new(CellId(3), 2, Point::new(10.0, 5.0))
    }

    #[test]
    fn origin_preserves_grab_offset() {
        let s = session();
        assert_eq!(s.origin_for(Point::new(110.0, 55.0)), Point::new(100.0, 50.0));
        assert_eq!(s.origin_for(Point::new(0.0, 0.0)), Point::new(-10.0, -5.0));
    }

    #[test]
    fn repeated_overlap_is_not_a_change() {
        let mut s = session();
        assert_eq!(s.observe_overlap(Some(4)), Some(4));
        assert_eq!(s.observe_overlap(Some(4)), None);
        assert_eq!(s.observe_overlap(Some(1)), Some(1));
        assert_eq!(s.last_overlap(), Some(1));
    }

    #[test]
    fn missing_overlap_keeps_previous() {
        let mut s = session();
        assert_eq!(s.observe_overlap(None), None);
        assert_eq!(s.last_overlap(), None);
        s.observe_overlap(Some(0));
        assert_eq!(s.observe_overlap(None), None);
        assert_eq!(s.last_overlap(), Some(0));
    }

    #[test]
    fn payload_always_suppresses_shadow() {
        let p = session().payload();
        assert_eq!(p.cell, CellId(3));
        assert_eq!(p.start_index, 2);
        assert_eq!(p.shadow, DragShadow::Suppressed);
    }

    #[test]
    fn closures_act_as_tap_sources() {
        let mut tapped = Vec::new();
        {
            let mut source = |v: &u32| tapped.push(*v);
            DragSource::<u32>::on_click_element(&mut source, &7u32);
            DragSource::<u32>::on_drag_ended(&mut source);
        }
        assert_eq!(tapped, vec![7]);
    }
}
