#![forbid(unsafe_code)]

//! Behavioral tunables for a [`ReorderGrid`](crate::ReorderGrid).
//!
//! Structure (counts, sizes, header/footer) comes from the adapter. Timing
//! and gesture thresholds live here and can be loaded from TOML or JSON with
//! the `config` feature.
//!
//! ```toml
//! # regrid.toml
//! animation_duration_ms = 200
//! settle_duration_factor = 1.3
//! long_press_ms = 400
//! touch_slop = 6.0
//! ```
//!
//! ```rust,ignore
//! let config = GridConfig::from_toml_file("regrid.toml")?.validated()?;
//! ```
//!
//! # Defaults
//!
//! 300ms shifts, settle at 1.3× that (390ms), 500ms long press, 8px slop.

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use regrid_core::gesture::GestureConfig;

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct GridConfig {
    /// Duration of a shift animation, in milliseconds.
    pub animation_duration_ms: u64,
    /// Settle duration as a multiple of `animation_duration_ms`.
    pub settle_duration_factor: f32,
    /// Hold time before a press becomes a drag, in milliseconds.
    pub long_press_ms: u64,
    /// Movement in pixels that cancels a pending tap or long press.
    pub touch_slop: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 300,
            settle_duration_factor: 1.3,
            long_press_ms: 500,
            touch_slop: 8.0,
        }
    }
}

impl GridConfig {
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_settle_factor(mut self, factor: f32) -> Self {
        self.settle_duration_factor = factor;
        self
    }

    #[must_use]
    pub fn with_long_press(mut self, threshold: Duration) -> Self {
        self.long_press_ms = u64::try_from(threshold.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Duration of a shift animation.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Duration of the settle animation.
    ///
    /// A non-finite or negative factor falls back to the plain animation
    /// duration.
    #[must_use]
    pub fn settle_duration(&self) -> Duration {
        let base = self.animation_duration();
        let factor = self.settle_duration_factor;
        if !factor.is_finite() || factor < 0.0 {
            return base;
        }
        // Rounded to whole microseconds so 300ms × 1.3 is 390ms, not 389.99.
        let micros = (base.as_micros() as f64 * f64::from(factor)).round();
        Duration::from_micros(micros as u64)
    }

    /// Thresholds for the grid's gesture recognizer.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            long_press_threshold: Duration::from_millis(self.long_press_ms),
            touch_slop: self.touch_slop.max(0.0),
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.settle_duration_factor.is_finite() || self.settle_duration_factor <= 0.0 {
            errors.push(format!(
                "settle_duration_factor must be finite and > 0, got {}",
                self.settle_duration_factor
            ));
        }

        if self.long_press_ms == 0 {
            errors.push("long_press_ms must be > 0".into());
        }

        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            errors.push(format!(
                "touch_slop must be finite and >= 0, got {}",
                self.touch_slop
            ));
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) finds nothing, otherwise a
    /// [`GridConfigError::Validation`].
    pub fn validated(self) -> Result<Self, GridConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(self);
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(message = "config.invalid", errors = %errors.join("; "));

        Err(GridConfigError::Validation(errors))
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, GridConfigError> {
        toml::from_str(s).map_err(GridConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GridConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(GridConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, GridConfigError> {
        serde_json::from_str(s).map_err(GridConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GridConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(GridConfigError::Io)?;
        Self::from_json_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading or validating a grid configuration.
#[derive(Debug)]
pub enum GridConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for GridConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for GridConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for GridConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
