#![forbid(unsafe_code)]

//! Drag-to-reorder grid widget.
//!
//! [`ReorderGrid`] lays out the cells supplied by a [`GridAdapter`] in a
//! uniform grid and lets the user long-press a cell, drag it over the others
//! while they slide out of the way, and release it into its new slot.
//!
//! The crate draws nothing. Hosts implement [`CellElement`] on their cell
//! views, feed pointer events and frame ticks in, and paint from the frames
//! the grid reports.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use regrid_core::geometry::{Point, Size};
//! use regrid_core::semantic_event::SemanticEvent;
//! use regrid_layout::AxisCount;
//! use regrid_widgets::{GridAdapter, PlainCell, ReorderGrid};
//!
//! struct Digits;
//!
//! impl GridAdapter for Digits {
//!     type View = PlainCell<u8>;
//!     type Region = ();
//!
//!     fn item_count(&self) -> usize { 4 }
//!     fn row_count(&self) -> AxisCount { AxisCount::Fixed(1) }
//!     fn column_count(&self) -> AxisCount { AxisCount::Fixed(4) }
//!     fn view(&mut self, index: usize) -> PlainCell<u8> { PlainCell::new(index as u8) }
//! }
//!
//! let mut grid = ReorderGrid::with_adapter(Digits);
//! grid.layout(Size::new(400.0, 100.0));
//!
//! grid.handle_semantic(&SemanticEvent::LongPress {
//!     pos: Point::new(50.0, 50.0),
//!     duration: Duration::from_millis(500),
//! });
//! grid.handle_semantic(&SemanticEvent::DragMove {
//!     start: Point::new(50.0, 50.0),
//!     current: Point::new(250.0, 50.0),
//! });
//!
//! let content: Vec<u8> = grid
//!     .order()
//!     .iter()
//!     .filter_map(|id| grid.cell(*id))
//!     .map(|cell| cell.view().content)
//!     .collect();
//! assert_eq!(content, vec![1, 2, 0, 3]);
//! ```

pub mod adapter;
pub mod animator;
pub mod cell;
pub mod config;
pub mod drag;
pub mod grid;
pub mod layout;
pub mod reorder;

pub use adapter::GridAdapter;
pub use animator::{AnimationKind, CellAnimator, Completed};
pub use cell::{Cell, CellElement, CellId, DraggedCell, PlainCell};
pub use config::{GridConfig, GridConfigError};
pub use drag::{DragPayload, DragSession, DragShadow, DragSource, GridPhase};
pub use grid::{GridChild, GridResponse, ReorderGrid, TickReport};
pub use layout::{GridLayout, LayoutDirty};
pub use reorder::Shift;
