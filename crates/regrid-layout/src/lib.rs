#![forbid(unsafe_code)]

//! Grid layout for regrid.
//!
//! A regrid grid is a fixed number of equally sized cells laid out row-major
//! in `columns × rows` slots, optionally with a header region above and a
//! footer region below. This crate holds the pure parts of that layout:
//!
//! - [`GridShape`]: what the adapter declares (counts, sizes, header/footer).
//! - [`GridMetrics`]: shape resolved against the available container size.
//! - [`GridGeometry`]: index ↔ pixel mapping and hit testing.
//!
//! Nothing here owns cells or state; `regrid-widgets` feeds these functions
//! on every layout pass.
//!
//! # Example
//!
//! ```
//! use regrid_core::geometry::{Point, Size};
//! use regrid_layout::{AxisCount, GridMetrics, GridShape};
//!
//! let shape = GridShape::new(6, AxisCount::Fixed(3), AxisCount::Fixed(2));
//! let metrics = GridMetrics::compute(&shape, Size::new(300.0, 200.0));
//! let geometry = metrics.geometry();
//!
//! assert_eq!(geometry.position_for_index(4), Point::new(100.0, 100.0));
//! assert_eq!(geometry.index_for_point(Point::new(150.0, 150.0)), Some(4));
//! ```

pub mod grid;
pub mod metrics;

pub use grid::GridGeometry;
pub use metrics::GridMetrics;

use serde::{Deserialize, Serialize};

/// A row or column count as declared by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisCount {
    /// Let the grid distribute cells itself.
    ///
    /// Automatic distribution is not implemented; it resolves to 1.
    Auto,
    /// A fixed count. Zero is coerced to 1.
    Fixed(usize),
}

impl AxisCount {
    /// The concrete count used for layout, always at least 1.
    #[inline]
    #[must_use]
    pub const fn resolve(self) -> usize {
        match self {
            Self::Auto => 1,
            Self::Fixed(0) => 1,
            Self::Fixed(n) => n,
        }
    }
}

impl Default for AxisCount {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl From<usize> for AxisCount {
    fn from(n: usize) -> Self {
        Self::Fixed(n)
    }
}

/// Structural numbers an adapter declares about its grid.
///
/// Sizes are in pixels. A child size of `0.0` means "derive from the
/// available container size"; a non-zero child size is only used when the
/// container has not been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridShape {
    pub item_count: usize,
    pub columns: AxisCount,
    pub rows: AxisCount,
    pub child_width: f32,
    pub child_height: f32,
    /// Total content height override; the grid is at least this tall.
    pub view_height: f32,
    pub header_height: f32,
    pub footer_height: f32,
}

impl GridShape {
    /// A shape with the given counts and no header, footer, or size hints.
    #[must_use]
    pub const fn new(item_count: usize, columns: AxisCount, rows: AxisCount) -> Self {
        Self {
            item_count,
            columns,
            rows,
            child_width: 0.0,
            child_height: 0.0,
            view_height: 0.0,
            header_height: 0.0,
            footer_height: 0.0,
        }
    }

    /// The single-cell shape used when no adapter is attached: one 400px
    /// square slot.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::new(1, AxisCount::Fixed(1), AxisCount::Fixed(1)).with_child_size(400.0, 400.0)
    }

    #[must_use]
    pub const fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    #[must_use]
    pub const fn with_footer_height(mut self, height: f32) -> Self {
        self.footer_height = height;
        self
    }

    #[must_use]
    pub const fn with_view_height(mut self, height: f32) -> Self {
        self.view_height = height;
        self
    }

    #[must_use]
    pub const fn with_child_size(mut self, width: f32, height: f32) -> Self {
        self.child_width = width;
        self.child_height = height;
        self
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_count_resolution() {
        assert_eq!(AxisCount::Auto.resolve(), 1);
        assert_eq!(AxisCount::Fixed(0).resolve(), 1);
        assert_eq!(AxisCount::Fixed(4).resolve(), 4);
        assert_eq!(AxisCount::from(3), AxisCount::Fixed(3));
    }

    #[test]
    fn placeholder_is_single_cell() {
        let shape = GridShape::default();
        assert_eq!(shape.item_count, 1);
        assert_eq!(shape.columns.resolve(), 1);
        assert_eq!(shape.rows.resolve(), 1);
        assert_eq!((shape.child_width, shape.child_height), (400.0, 400.0));
    }

    #[test]
    fn builders_set_regions() {
        let shape = GridShape::new(9, AxisCount::Fixed(3), AxisCount::Auto)
            .with_header_height(40.0)
            .with_footer_height(24.0)
            .with_view_height(900.0)
            .with_child_size(80.0, 60.0);
        assert_eq!(shape.header_height, 40.0);
        assert_eq!(shape.footer_height, 24.0);
        assert_eq!(shape.view_height, 900.0);
        assert_eq!((shape.child_width, shape.child_height), (80.0, 60.0));
    }
}
