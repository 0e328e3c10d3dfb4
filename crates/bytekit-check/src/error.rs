//! Error types for Bytekit Check.

use thiserror::Error;

/// A rule set could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into rules.
    #[error("malformed rules: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The rules parsed but hold an unusable value.
    #[error("invalid rules: {0}")]
    Invalid(String),
}
