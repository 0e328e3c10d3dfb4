//! # Bytekit Check
//!
//! Aggregated validation failures.
//!
//! A check runs every rule, records each broken one, and reports them
//! together as a single error whose message lists every reason:
//!
//! ```rust
//! use bytekit_check::check_line;
//!
//! let err = check_line("abc123").unwrap_err();
//! assert_eq!(err.to_string(), "found numbers;no 2 spaces");
//!
//! assert!(check_line("a b c").is_ok());
//! ```

pub mod error;
pub mod failures;
pub mod rules;

pub use error::ConfigError;
pub use failures::{FailureCollector, Failures};
pub use rules::{check_line, LineRules, Violation};
