#![forbid(unsafe_code)]

//! Grid sizing: resolving a [`GridShape`] against the available container size.
//!
//! - `column_width = available_width / columns`
//! - `row_height = available_height / rows`
//! - `content_height = max(footer_bottom, shape.view_height)`. A declared view
//!   height makes the container taller; it never stretches the rows.
//! - The header sits at `(0, 0)`; the footer sits directly below the last row
//!   at `rows * row_height + header_height`.
//!
//! # Failure Modes
//!
//! - Zero row or column counts resolve to 1 (see [`AxisCount::resolve`]).
//! - An unmeasured container (zero width or height) falls back to the
//!   adapter's declared child size for that axis.
//!
//! [`AxisCount::resolve`]: crate::AxisCount::resolve

use regrid_core::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

use crate::GridShape;
use crate::grid::GridGeometry;

/// Resolved sizes for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    geometry: GridGeometry,
    rows: usize,
    width: f32,
    footer_height: f32,
    view_height: f32,
}

impl GridMetrics {
    /// Resolve `shape` against `available` container size.
    #[must_use]
    pub fn compute(shape: &GridShape, available: Size) -> Self {
        let columns = shape.columns.resolve();
        let rows = shape.rows.resolve();

        let column_width = if available.width > 0.0 {
            available.width / columns as f32
        } else {
            shape.child_width.max(0.0)
        };
        let row_height = if available.height > 0.0 {
            available.height / rows as f32
        } else {
            shape.child_height.max(0.0)
        };

        let width = if available.width > 0.0 {
            available.width
        } else {
            column_width * columns as f32
        };

        Self {
            geometry: GridGeometry::new(
                columns,
                column_width,
                row_height,
                shape.header_height.max(0.0),
                shape.item_count,
            ),
            rows,
            width,
            footer_height: shape.footer_height.max(0.0),
            view_height: shape.view_height.max(0.0),
        }
    }

    /// Index/point mapping for this pass.
    #[inline]
    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.geometry.columns()
    }

    /// Container width used for header/footer frames.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Header frame: `(0, 0)` sized `width × header_height`.
    #[must_use]
    pub fn header_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.geometry.header_height())
    }

    /// Footer frame, directly below the last row.
    #[must_use]
    pub fn footer_rect(&self) -> Rect {
        let y = self.rows as f32 * self.geometry.row_height() + self.geometry.header_height();
        Rect::new(0.0, y, self.width, self.footer_height)
    }

    /// Total height of header, grid body, and footer, raised to the
    /// declared view height.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.footer_rect().bottom().max(self.view_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AxisCount;
    use regrid_core::geometry::Point;

    #[test]
    fn divides_available_space() {
        let shape = GridShape::new(12, AxisCount::Fixed(4), AxisCount::Fixed(3));
        let m = GridMetrics::compute(&shape, Size::new(400.0, 300.0));
        assert_eq!(m.geometry().column_width(), 100.0);
        assert_eq!(m.geometry().row_height(), 100.0);
        assert_eq!(m.columns(), 4);
        assert_eq!(m.rows(), 3);
    }

    #[test]
    fn view_height_raises_content_not_rows() {
        let shape =
            GridShape::new(4, AxisCount::Fixed(2), AxisCount::Fixed(2)).with_view_height(1000.0);
        let m = GridMetrics::compute(&shape, Size::new(200.0, 400.0));
        assert_eq!(m.geometry().row_height(), 200.0);
        assert_eq!(m.footer_rect().y, 400.0);
        assert_eq!(m.content_height(), 1000.0);

        let m = GridMetrics::compute(&shape, Size::new(200.0, 1200.0));
        assert_eq!(m.geometry().row_height(), 600.0);
        assert_eq!(m.content_height(), 1200.0);
    }

    #[test]
    fn view_height_sizes_rows_only_when_unmeasured() {
        let shape = GridShape::new(4, AxisCount::Fixed(2), AxisCount::Fixed(2))
            .with_child_size(50.0, 40.0)
            .with_view_height(300.0);
        let m = GridMetrics::compute(&shape, Size::new(0.0, 0.0));
        assert_eq!(m.geometry().row_height(), 40.0);
        assert_eq!(m.content_height(), 300.0);
    }

    #[test]
    fn header_and_footer_frames() {
        let shape = GridShape::new(6, AxisCount::Fixed(3), AxisCount::Fixed(2))
            .with_header_height(50.0)
            .with_footer_height(30.0);
        let m = GridMetrics::compute(&shape, Size::new(300.0, 200.0));
        assert_eq!(m.header_rect(), Rect::new(0.0, 0.0, 300.0, 50.0));
        assert_eq!(m.footer_rect(), Rect::new(0.0, 250.0, 300.0, 30.0));
        assert_eq!(m.content_height(), 280.0);
        assert_eq!(m.geometry().position_for_index(0), Point::new(0.0, 50.0));
    }

    #[test]
    fn auto_and_zero_counts_fall_back_to_one() {
        let shape = GridShape::new(3, AxisCount::Auto, AxisCount::Fixed(0));
        let m = GridMetrics::compute(&shape, Size::new(90.0, 60.0));
        assert_eq!(m.columns(), 1);
        assert_eq!(m.rows(), 1);
        assert_eq!(m.geometry().column_width(), 90.0);
        assert_eq!(m.geometry().row_height(), 60.0);
    }

    #[test]
    fn unmeasured_container_uses_child_size() {
        let shape = GridShape::new(4, AxisCount::Fixed(2), AxisCount::Fixed(2))
            .with_child_size(64.0, 48.0);
        let m = GridMetrics::compute(&shape, Size::ZERO);
        assert_eq!(m.geometry().column_width(), 64.0);
        assert_eq!(m.geometry().row_height(), 48.0);
        assert_eq!(m.width(), 128.0);
    }
}
