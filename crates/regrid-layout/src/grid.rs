#![forbid(unsafe_code)]

//! Index ↔ pixel mapping for a uniform cell grid.
//!
//! Cells are laid out row-major. Cell `i` sits in column `i mod columns` and
//! row `i div columns`, offset down by the header height.
//!
//! # Invariants
//!
//! 1. Cell rectangles are half-open and tile the grid body without gaps or
//!    overlaps: a point inside the body is contained in at most one cell.
//! 2. `index_for_point(position_for_index(i) + ε)` returns `i` for any
//!    `i < cell_count` and any `ε` strictly inside the cell.
//! 3. `columns` is always at least 1.

use regrid_core::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Resolved grid parameters for index/point conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    columns: usize,
    column_width: f32,
    row_height: f32,
    header_height: f32,
    cell_count: usize,
}

impl GridGeometry {
    /// Create grid geometry. A `columns` of zero is coerced to 1.
    #[must_use]
    pub fn new(
        columns: usize,
        column_width: f32,
        row_height: f32,
        header_height: f32,
        cell_count: usize,
    ) -> Self {
        Self {
            columns: columns.max(1),
            column_width,
            row_height,
            header_height,
            cell_count,
        }
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    #[must_use]
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    #[inline]
    #[must_use]
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    #[inline]
    #[must_use]
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Size of every cell.
    #[inline]
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(self.column_width, self.row_height)
    }

    /// Top-left corner of the slot for `index`.
    #[must_use]
    pub fn position_for_index(&self, index: usize) -> Point {
        let col = index % self.columns;
        let row = index / self.columns;
        Point::new(
            col as f32 * self.column_width,
            row as f32 * self.row_height + self.header_height,
        )
    }

    /// Full rectangle of the slot for `index`.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> Rect {
        Rect::from_origin_size(self.position_for_index(index), self.cell_size())
    }

    /// The cell index whose rectangle contains `point`, if any.
    ///
    /// Only indices in `0..cell_count` are considered, so empty trailing
    /// slots of a partially filled last row resolve to `None`.
    #[must_use]
    pub fn index_for_point(&self, point: Point) -> Option<usize> {
        if let Some(candidate) = self.candidate_index(point)
            && candidate < self.cell_count
            && self.slot_contains(candidate, point)
        {
            return Some(candidate);
        }
        // Float rounding at a shared edge can put the division one slot off;
        // the slot scan is authoritative.
        (0..self.cell_count).find(|&i| self.slot_contains(i, point))
    }

    /// Half-open containment for the slot at `index`.
    ///
    /// Edges are computed as `col * width` and `(col + 1) * width` rather than
    /// `origin + width`, so neighbouring slots share bit-identical edges.
    fn slot_contains(&self, index: usize, point: Point) -> bool {
        let col = (index % self.columns) as f32;
        let row = (index / self.columns) as f32;
        let left = col * self.column_width;
        let right = (col + 1.0) * self.column_width;
        let top = row * self.row_height + self.header_height;
        let bottom = (row + 1.0) * self.row_height + self.header_height;
        point.x >= left && point.x < right && point.y >= top && point.y < bottom
    }

    fn candidate_index(&self, point: Point) -> Option<usize> {
        if self.column_width <= 0.0 || self.row_height <= 0.0 {
            return None;
        }
        let body_y = point.y - self.header_height;
        if point.x < 0.0 || body_y < 0.0 {
            return None;
        }
        let col = (point.x / self.column_width) as usize;
        if col >= self.columns {
            return None;
        }
        let row = (body_y / self.row_height) as usize;
        row.checked_mul(self.columns)?.checked_add(col)
    }
}
