//! Error types for the command queue.

use thiserror::Error;

/// Errors that can occur when handing a command to a sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The drain side of the queue is gone.
    #[error("command queue disconnected")]
    Disconnected,
}

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;
