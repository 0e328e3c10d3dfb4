//! Error types for Bytekit Core.

use thiserror::Error;

/// Errors a byte source can report from a pull.
///
/// Exhaustion is not an error; it is carried by [`Pull::exhausted`](crate::Pull).
#[derive(Debug, Error)]
pub enum StreamError {
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source failed for a reason of its own.
    #[error("source failed: {0}")]
    Failed(String),
}

impl StreamError {
    /// Build a [`StreamError::Failed`] from any message.
    pub fn failed(msg: impl Into<String>) -> Self {
        StreamError::Failed(msg.into())
    }
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;
