//! # Bytekit
//!
//! Small composable pieces for pulling bytes and reporting validation
//! failures.
//!
//! ## Overview
//!
//! - **Sources**: anything implementing [`ByteSource`] can be pulled,
//!   bounded, copied, or bridged to `std::io`
//! - **Generator**: [`random_bytes`] is an infinite, seed-reproducible source
//! - **Limit**: [`limit`] caps the bytes any source delivers
//! - **Failures**: [`Failures`] reports every broken rule of a check at once
//!
//! ## Usage
//!
//! ```rust
//! use bytekit::{copy_n, random_bytes, check_line, SliceSource};
//!
//! // Four bytes of text, then the source is done.
//! let mut text = SliceSource::from_static(b"some io.Reader stream to be read\n");
//! let mut out = Vec::new();
//! copy_n(&mut text, &mut out, 4).unwrap();
//! assert_eq!(out, b"some");
//!
//! // The same seed always yields the same bytes.
//! let mut a = Vec::new();
//! let mut b = Vec::new();
//! copy_n(&mut random_bytes(7), &mut a, 32).unwrap();
//! copy_n(&mut random_bytes(7), &mut b, 32).unwrap();
//! assert_eq!(a, b);
//!
//! // Every broken rule is reported.
//! let err = check_line("1234567890 1234567890").unwrap_err();
//! assert_eq!(err.to_string(), "Line is too long;found numbers;no 2 spaces");
//! ```
//!
//! ## Re-exports
//!
//! - `bytekit::core` - Sources, generator, limit, `std::io` bridges
//! - `bytekit::check` - Failure aggregation and line rules

pub mod config;
pub mod copy;
pub mod error;
pub mod session;

// Re-export component crates
pub use bytekit_check as check;
pub use bytekit_core as core;

pub use config::{ToolkitConfig, DEFAULT_COPY_BUFFER};
pub use copy::{copy, copy_n, copy_with_buffer, read_to_vec};
pub use error::{Result, ToolkitError};
pub use session::{CheckSession, SessionSummary, PASSED_MESSAGE};

// Re-export commonly used types
pub use bytekit_check::{check_line, FailureCollector, Failures, LineRules, Violation};
pub use bytekit_core::{
    limit, random_bytes, ByteSource, Limit, Pull, ReaderSource, SliceSource, SourceReader,
    StreamError,
};
