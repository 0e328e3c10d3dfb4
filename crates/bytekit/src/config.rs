//! Toolkit configuration.

use std::io::Write;

use bytekit_check::LineRules;
use bytekit_core::{limit, ByteSource};
use serde::{Deserialize, Serialize};

use crate::copy::copy_with_buffer;
use crate::error::Result;

/// Default size of the scratch buffer used by [`copy`](crate::copy::copy).
pub const DEFAULT_COPY_BUFFER: usize = 8 * 1024;

/// Configuration for copy utilities and check sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Rules applied by check sessions.
    pub rules: LineRules,
    /// Scratch buffer size for copies.
    pub copy_buffer_size: usize,
    /// Line that ends a check session.
    pub quit_command: String,
    /// Prompt written before each line is read.
    pub prompt: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            rules: LineRules::default(),
            copy_buffer_size: DEFAULT_COPY_BUFFER,
            quit_command: "q".to_string(),
            prompt: "Enter string (to quit press q): ".to_string(),
        }
    }
}

impl ToolkitConfig {
    /// [`copy`](crate::copy::copy) using this config's buffer size.
    pub fn copy<S, W>(&self, src: &mut S, sink: &mut W) -> Result<u64>
    where
        S: ByteSource + ?Sized,
        W: Write + ?Sized,
    {
        copy_with_buffer(src, sink, self.copy_buffer_size)
    }

    /// [`copy_n`](crate::copy::copy_n) using this config's buffer size.
    pub fn copy_n<S, W>(&self, src: &mut S, sink: &mut W, n: u64) -> Result<u64>
    where
        S: ByteSource + ?Sized,
        W: Write + ?Sized,
    {
        self.copy(&mut limit(src, n), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolkitError;
    use bytekit_core::SliceSource;
    use bytekit_testkit::fixtures::RecordingSource;

    #[test]
    fn test_copy_uses_configured_buffer() {
        let config = ToolkitConfig {
            copy_buffer_size: 5,
            ..ToolkitConfig::default()
        };
        let mut src = RecordingSource::new(SliceSource::from_static(b"twelve bytes"));
        let mut out = Vec::new();

        assert_eq!(config.copy(&mut src, &mut out).unwrap(), 12);
        assert_eq!(out, b"twelve bytes");
        assert_eq!(src.requests(), &[5, 5, 5]);
    }

    #[test]
    fn test_copy_n_uses_configured_buffer() {
        let config = ToolkitConfig {
            copy_buffer_size: 3,
            ..ToolkitConfig::default()
        };
        let mut src = RecordingSource::new(SliceSource::from_static(b"some io.Reader"));
        let mut out = Vec::new();

        assert_eq!(config.copy_n(&mut src, &mut out, 4).unwrap(), 4);
        assert_eq!(out, b"some");
        assert_eq!(src.requests(), &[3, 1]);
    }

    #[test]
    fn test_zero_buffer_size_rejected() {
        let config = ToolkitConfig {
            copy_buffer_size: 0,
            ..ToolkitConfig::default()
        };
        let err = config
            .copy(&mut SliceSource::from_static(b"x"), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidArgument(_)));
    }
}
