#![forbid(unsafe_code)]

//! The adapter contract: how a host describes the cells of a grid.
//!
//! An adapter declares how many cells exist, how they are arranged, how big
//! they are, and supplies one view per cell. The grid calls [`view`] once per
//! index when the adapter is attached and again only when it is replaced or
//! its item count changes.
//!
//! [`view`]: GridAdapter::view

use regrid_layout::{AxisCount, GridShape};

use crate::cell::CellElement;

/// Host-supplied description of a grid's content.
///
/// Only the counts and [`view`](GridAdapter::view) are required; every size
/// defaults to `0.0` ("not declared") and header/footer default to absent.
pub trait GridAdapter {
    /// Per-cell view type.
    type View: CellElement;
    /// Header/footer region type. Use `()` if the grid has neither.
    type Region;

    fn item_count(&self) -> usize;

    fn row_count(&self) -> AxisCount;

    fn column_count(&self) -> AxisCount;

    /// Declared cell width, used only before the container is measured.
    fn child_view_width(&self) -> f32 {
        0.0
    }

    /// Declared cell height, used only before the container is measured.
    fn child_view_height(&self) -> f32 {
        0.0
    }

    /// Minimum total content height.
    fn view_height(&self) -> f32 {
        0.0
    }

    fn header_view_height(&self) -> f32 {
        0.0
    }

    fn footer_view_height(&self) -> f32 {
        0.0
    }

    fn header(&mut self) -> Option<Self::Region> {
        None
    }

    fn footer(&mut self) -> Option<Self::Region> {
        None
    }

    /// Create the view for the cell initially at `index`.
    fn view(&mut self, index: usize) -> Self::View;

    /// Snapshot of every declared count and size.
    fn shape(&self) -> GridShape {
        GridShape::new(self.item_count(), self.column_count(), self.row_count())
            .with_child_size(self.child_view_width(), self.child_view_height())
            .with_view_height(self.view_height())
            .with_header_height(self.header_view_height())
            .with_footer_height(self.footer_view_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PlainCell;

    struct Letters;

    impl GridAdapter for Letters {
        type View = PlainCell<char>;
        type Region = &'static str;

        fn item_count(&self) -> usize {
            4
        }

        fn row_count(&self) -> AxisCount {
            AxisCount::Fixed(2)
        }

        fn column_count(&self) -> AxisCount {
            AxisCount::Auto
        }

        fn header_view_height(&self) -> f32 {
            32.0
        }

        fn header(&mut self) -> Option<&'static str> {
            Some("letters")
        }

        fn view(&mut self, index: usize) -> PlainCell<char> {
            PlainCell::new((b'a' + index as u8) as char)
        }
    }

    #[test]
    fn shape_collects_declared_values() {
        let shape = Letters.shape();
        assert_eq!(shape.item_count, 4);
        assert_eq!(shape.rows, AxisCount::Fixed(2));
        assert_eq!(shape.columns, AxisCount::Auto);
        assert_eq!(shape.header_height, 32.0);
        assert_eq!(shape.footer_height, 0.0);
        assert_eq!(shape.view_height, 0.0);
    }

    #[test]
    fn defaults_declare_nothing() {
        let mut adapter = Letters;
        assert_eq!(adapter.footer(), None);
        assert_eq!(adapter.header(), Some("letters"));
        assert_eq!(adapter.view(2).content, 'c');
    }
}
