//! Error types for Bytekit.

use bytekit_check::ConfigError;
use bytekit_core::StreamError;
use thiserror::Error;

/// Errors that can occur in toolkit operations.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A source failed while being pulled.
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// Writing to a sink or reading session input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, ToolkitError>;
