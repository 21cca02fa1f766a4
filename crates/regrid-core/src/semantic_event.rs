#![forbid(unsafe_code)]

//! High-level semantic events derived from raw pointer input.
//!
//! [`SemanticEvent`] represents user *intentions* rather than raw contacts. The
//! [`GestureRecognizer`](crate::gesture::GestureRecognizer) converts
//! [`PointerEvent`](crate::event::PointerEvent) sequences into these.
//!
//! # Invariants
//! 1. Every drag sequence is well-formed: `LongPress` → zero or more
//!    `DragMove` → `DragEnd` or `DragCancel`.
//! 2. `Tap` and `LongPress` never both emit for the same down → up contact.
//! 3. `DragMove` is never emitted without a preceding `LongPress`.

use std::time::Duration;

use crate::geometry::Point;

/// High-level events consumed by interactive widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticEvent {
    /// Down then up without leaving the touch slop, before the long press fired.
    Tap { pos: Point },

    /// Contact held stationary beyond the long-press threshold. Starts a drag.
    LongPress { pos: Point, duration: Duration },

    /// Pointer moved while a long-press drag is active.
    DragMove {
        /// Where the long press fired.
        start: Point,
        current: Point,
    },

    /// Pointer released while a long-press drag is active.
    DragEnd { start: Point, end: Point },

    /// The platform took the pointer away during a drag.
    DragCancel,
}

impl SemanticEvent {
    /// Returns true if this is part of a long-press drag sequence.
    #[must_use]
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            Self::LongPress { .. } | Self::DragMove { .. } | Self::DragEnd { .. } | Self::DragCancel
        )
    }

    /// Returns the pointer position carried by this event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Tap { pos } | Self::LongPress { pos, .. } => Some(*pos),
            Self::DragMove { current, .. } => Some(*current),
            Self::DragEnd { end, .. } => Some(*end),
            Self::DragCancel => None,
        }
    }
}
