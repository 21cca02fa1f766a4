#![forbid(unsafe_code)]

//! The grid layout pass.
//!
//! [`GridLayout`] memoizes the [`GridMetrics`] for the last container size
//! and adapter shape, recomputing only when the size changes or the grid is
//! marked dirty. [`place_cells`] then moves every cell to its slot.
//!
//! # Invariants
//!
//! 1. After a pass, every cell other than the floating one has
//!    `frame == geometry.cell_rect(cell.index())`.
//! 2. The floating (dragged or settling) cell keeps its origin; only its size
//!    follows the new metrics.
//! 3. In-flight animations are never cancelled by a pass. They are pointed at
//!    the cell's new slot instead.

use bitflags::bitflags;
use regrid_core::geometry::{Rect, Size};
use regrid_layout::{GridMetrics, GridShape};

use crate::animator::{AnimationKind, CellAnimator};
use crate::cell::{Cell, CellElement, CellId};

bitflags! {
    /// Reasons the next layout pass must recompute metrics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayoutDirty: u8 {
        /// The available container size changed.
        const SIZE  = 0b01;
        /// Adapter-declared counts or sizes changed.
        const SHAPE = 0b10;
        const ALL   = Self::SIZE.bits() | Self::SHAPE.bits();
    }
}

/// Memoized sizing state for one grid.
#[derive(Debug, Clone)]
pub struct GridLayout {
    shape: GridShape,
    available: Size,
    metrics: GridMetrics,
    dirty: LayoutDirty,
}

impl GridLayout {
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            available: Size::ZERO,
            metrics: GridMetrics::compute(&shape, Size::ZERO),
            dirty: LayoutDirty::ALL,
        }
    }

    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    #[inline]
    #[must_use]
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    #[inline]
    #[must_use]
    pub fn available(&self) -> Size {
        self.available
    }

    #[inline]
    #[must_use]
    pub fn dirty(&self) -> LayoutDirty {
        self.dirty
    }

    /// Replace the adapter shape and force the next pass to recompute.
    pub fn set_shape(&mut self, shape: GridShape) {
        self.shape = shape;
        self.dirty |= LayoutDirty::SHAPE;
    }

    pub fn mark_dirty(&mut self, flags: LayoutDirty) {
        self.dirty |= flags;
    }

    /// Resolve metrics for `available`. Returns `true` if they were
    /// recomputed.
    pub fn update(&mut self, available: Size) -> bool {
        if available != self.available {
            self.available = available;
            self.dirty |= LayoutDirty::SIZE;
        }
        if self.dirty.is_empty() {
            return false;
        }
        self.metrics = GridMetrics::compute(&self.shape, available);
        self.dirty = LayoutDirty::empty();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "layout.metrics",
            width = available.width,
            height = available.height,
            columns = self.metrics.columns(),
            rows = self.metrics.rows(),
            column_width = self.metrics.geometry().column_width(),
            row_height = self.metrics.geometry().row_height()
        );

        true
    }
}

/// Move every cell to the slot for its index, skipping the `floating` cell.
pub fn place_cells<V: CellElement>(
    cells: &mut [Cell<V>],
    metrics: &GridMetrics,
    floating: Option<CellId>,
    animator: &mut CellAnimator,
) {
    let geometry = metrics.geometry();
    let cell_size = geometry.cell_size();

    for cell in cells.iter_mut() {
        let target = geometry.cell_rect(cell.index());

        if floating == Some(cell.id()) {
            cell.frame = Rect::from_origin_size(cell.frame.origin(), cell_size);
            if let Some((AnimationKind::Settle, _)) = animator.target(cell.id()) {
                animator.retarget(cell.id(), target.origin());
            }
            continue;
        }

        if animator.retarget(cell.id(), target.origin()) {
            cell.frame = target;
        } else {
            cell.snap_to(target);
        }
    }
}
