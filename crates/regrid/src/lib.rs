#![forbid(unsafe_code)]

//! regrid public facade crate.
//!
//! Re-exports the types needed to embed a drag-to-reorder grid and offers a
//! prelude for day-to-day usage. The member crates stay reachable as
//! [`core`], [`layout`], and [`widgets`].

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use regrid_core::animation::{Animation, Ramp, Tween};
pub use regrid_core::event::{PointerEvent, PointerEventKind, PointerId};
pub use regrid_core::geometry::{Point, Rect, Size};
pub use regrid_core::gesture::{GestureConfig, GestureRecognizer};
pub use regrid_core::semantic_event::SemanticEvent;
#[cfg(feature = "tracing-json")]
pub use regrid_core::logging::init_json_logging;

// --- Layout re-exports -----------------------------------------------------

pub use regrid_layout::{AxisCount, GridGeometry, GridMetrics, GridShape};

// --- Widget re-exports -----------------------------------------------------

pub use regrid_widgets::{
    Cell, CellElement, CellId, DragPayload, DragShadow, DragSource, DraggedCell, GridAdapter,
    GridChild, GridConfig, GridConfigError, GridPhase, GridResponse, PlainCell, ReorderGrid,
    TickReport,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for regrid hosts.
#[derive(Debug)]
pub enum Error {
    /// I/O failure, e.g. reading a configuration file.
    Io(std::io::Error),
    /// Configuration could not be parsed or is out of range.
    Config(GridConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "config: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<GridConfigError> for Error {
    fn from(err: GridConfigError) -> Self {
        match err {
            GridConfigError::Io(io) => Self::Io(io),
            other => Self::Config(other),
        }
    }
}

/// Standard result type for regrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load and validate a [`GridConfig`] from a `.toml` or `.json` file.
///
/// The format is chosen by extension; anything other than `.json` is read as
/// TOML.
#[cfg(feature = "config")]
pub fn load_config(path: impl AsRef<std::path::Path>) -> Result<GridConfig> {
    let path = path.as_ref();
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => GridConfig::from_json_file(path)?,
        _ => GridConfig::from_toml_file(path)?,
    };
    Ok(config.validated()?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AxisCount, Cell, CellElement, CellId, DragSource, Error, GridAdapter, GridConfig,
        GridPhase, GridResponse, PlainCell, Point, PointerEvent, Rect, ReorderGrid, Result,
        SemanticEvent, Size,
    };

    pub use crate::{core, layout, widgets};
}

pub use regrid_core as core;
pub use regrid_layout as layout;
pub use regrid_widgets as widgets;
