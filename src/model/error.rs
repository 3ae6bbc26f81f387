//! Error types for vlist.
//!
//! The virtualizer core raises no runtime errors: empty input renders nothing
//! and out-of-range scroll offsets are clamped. The only failures are
//! configuration mistakes, caught once at the integration boundary, and the
//! I/O failures of the terminal shell.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the `vlist` binary
//!   - [`DimensionError`] - Rejected item height / max height
//!   - [`ConfigError`] - Config file read or TOML parse failure
//!   - [`LoggingError`] - Tracing subscriber setup failure
//!   - [`TuiError`] - Terminal I/O failure
//!
//! Errors returned by a fallible `render_item` callback are never wrapped; they
//! reach the caller of `try_render` unchanged.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error.
///
/// All domain-specific errors convert into `AppError` via `From`, so `main`
/// can propagate with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The resolved configuration describes an impossible list geometry.
    #[error("Invalid list configuration: {0}")]
    Dimension(#[from] DimensionError),

    /// The configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, drawing or restore failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}

/// A list dimension that cannot describe a usable layout.
///
/// Item heights and the viewport cap must be strictly positive. A zero or
/// negative value is a programmer error and is rejected when the
/// configuration is built, not discovered during rendering.
///
/// # Examples
///
/// ```
/// use vlist::model::error::DimensionError;
///
/// let err = DimensionError::NonPositive { field: "item_height", value: -4 };
/// assert_eq!(err.to_string(), "item_height must be > 0 (got -4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// Zero or negative dimension.
    #[error("{field} must be > 0 (got {value})")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value as supplied.
        value: i64,
    },

    /// Dimension does not fit in 32 bits of layout units.
    #[error("{field} is too large (got {value}, max {max})", max = u32::MAX)]
    TooLarge {
        /// Name of the offending field.
        field: &'static str,
        /// Value as supplied.
        value: i64,
    },
}
