#![forbid(unsafe_code)]

//! Structured logging support.
//!
//! With the `tracing` feature enabled, this module re-exports the `tracing`
//! macros so downstream crates can log through `regrid_core` without naming
//! `tracing` themselves. With `tracing-json`, [`init_json_logging`] installs a
//! JSON subscriber suitable for production log collection.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Environment variable consulted for the log filter before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "REGRID_LOG";

/// Install a global JSON `tracing` subscriber.
///
/// The filter is read from `REGRID_LOG`, then `RUST_LOG`, defaulting to
/// `info`. Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(false)
        .try_init()
        .is_ok()
}
