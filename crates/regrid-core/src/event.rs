#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! The platform delivers raw touch/mouse input as [`PointerEvent`]s, serially,
//! on the UI thread. Coordinates are already translated into the grid
//! container's pixel space.
//!
//! # Design Notes
//!
//! - Every event carries a [`PointerId`] so multi-touch platforms can report
//!   secondary fingers; the gesture recognizer tracks only the first one.
//! - `Cancel` is delivered when the platform takes the pointer away (system
//!   gesture, focus loss). It never carries a position.

use crate::geometry::Point;

/// Identity of a pointer (finger or mouse) for the duration of one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerId(pub u32);

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEventKind {
    /// Contact started.
    Down,
    /// Contact moved while down.
    Move,
    /// Contact released.
    Up,
    /// Contact taken away by the platform.
    Cancel,
}

/// A raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointer: PointerId,
    /// Position in container pixels. Ignored for `Cancel`.
    pub pos: Point,
}

impl PointerEvent {
    /// Create an event for the primary pointer.
    #[must_use]
    pub const fn new(kind: PointerEventKind, pos: Point) -> Self {
        Self {
            kind,
            pointer: PointerId(0),
            pos,
        }
    }

    /// Shorthand for a primary-pointer `Down`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    /// Shorthand for a primary-pointer `Move`.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    /// Shorthand for a primary-pointer `Up`.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    /// Shorthand for a primary-pointer `Cancel`.
    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO)
    }

    /// Set the pointer id.
    #[must_use]
    pub const fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }
}
