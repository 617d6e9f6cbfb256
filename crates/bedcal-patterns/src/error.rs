//! Error types for the pattern generators.

use thiserror::Error;

/// Errors that can occur while preparing a calibration pattern.
///
/// The generators perform no I/O and no runtime validation; the only
/// failure mode is a configuration that cannot produce a sane pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    /// Invalid calibration settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
