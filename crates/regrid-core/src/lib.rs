#![forbid(unsafe_code)]

//! Core: pointer input, touch gestures, pixel geometry, and animation.
//!
//! # Role in regrid
//! `regrid-core` is the input and motion layer. It owns the normalized
//! pointer event types the platform feeds in, the gesture recognizer that
//! turns them into taps and long-press drags, and the linear animation
//! primitives the grid uses to slide cells around.
//!
//! # How it fits in the system
//! `regrid-layout` builds grid geometry on top of [`geometry`], and
//! `regrid-widgets` drives [`gesture::GestureRecognizer`] and
//! [`animation::Tween`] from its reorderable grid controller. Nothing in
//! this crate knows about grids.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod semantic_event;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
