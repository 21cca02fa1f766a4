#![forbid(unsafe_code)]

//! Grid cells and the capability host views implement to live in a grid.
//!
//! A [`Cell`] pairs a stable [`CellId`] with a host-supplied view. The view
//! owns the cell's logical index through [`CellElement`]; the grid owns the
//! cell's geometry (its laid-out `frame` and its animated `visual` origin).
//! The grid never draws anything: hosts read [`Cell::visual_rect`] when they
//! paint.

use std::fmt;

use regrid_core::geometry::{Point, Rect};

/// Stable identity of a cell.
///
/// Ids are never reused within one grid, including across adapter
/// replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) u64);

impl CellId {
    /// Raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

/// Identifies the dragged cell to drag-start and drag-end hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraggedCell {
    pub id: CellId,
    /// The dragged cell's index at the time the hook fires.
    pub index: usize,
}

/// Capability every host cell view implements.
///
/// The grid reads and writes the logical index only through this trait and
/// fires the drag hooks on every cell, the dragged one included.
pub trait CellElement {
    /// Current 0-based position in the logical order.
    fn index(&self) -> usize;

    /// Move to a new logical position.
    fn set_index(&mut self, index: usize);

    /// A drag is about to start. Cells may dim or highlight themselves.
    fn on_drag_start_preceding(&mut self, _dragged: &DraggedCell) {}

    /// The dragged cell was released.
    fn on_drag_ended(&mut self, _dragged: &DraggedCell) {}
}

/// A minimal [`CellElement`] carrying arbitrary content.
///
/// `dimmed` is set for every cell except the dragged one while a drag runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlainCell<T> {
    pub content: T,
    index: usize,
    dimmed: bool,
}

impl<T> PlainCell<T> {
    #[must_use]
    pub fn new(content: T) -> Self {
        Self {
            content,
            index: 0,
            dimmed: false,
        }
    }

    #[must_use]
    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }
}

impl<T> CellElement for PlainCell<T> {
    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    fn on_drag_start_preceding(&mut self, dragged: &DraggedCell) {
        self.dimmed = dragged.index != self.index;
    }

    fn on_drag_ended(&mut self, _dragged: &DraggedCell) {
        self.dimmed = false;
    }
}

/// One grid slot: identity, host view, and geometry.
#[derive(Debug, Clone)]
pub struct Cell<V> {
    id: CellId,
    view: V,
    pub(crate) frame: Rect,
    pub(crate) visual: Point,
}

impl<V: CellElement> Cell<V> {
    pub(crate) fn new(id: CellId, view: V) -> Self {
        Self {
            id,
            view,
            frame: Rect::default(),
            visual: Point::ZERO,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.view.index()
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[inline]
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Laid-out rectangle. For the dragged cell this follows the pointer.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Where the cell is drawn this frame: the frame, moved to the in-flight
    /// animation sample if one is running.
    #[inline]
    #[must_use]
    pub fn visual_rect(&self) -> Rect {
        self.frame.with_origin(self.visual)
    }

    /// Place the cell at `frame` with no animation.
    pub(crate) fn snap_to(&mut self, frame: Rect) {
        self.frame = frame;
        self.visual = frame.origin();
    }

    pub(crate) fn descriptor(&self) -> DraggedCell {
        DraggedCell {
            id: self.id,
            index: self.index(),
        }
    }
}
