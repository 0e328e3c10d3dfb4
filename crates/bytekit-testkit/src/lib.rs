//! # Bytekit Testkit
//!
//! Testing utilities for Bytekit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with the exact failure text or bytes expected
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Scripted and recording sources for exercising decorators
//!
//! ## Golden Vectors
//!
//! ```rust
//! use bytekit_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{name}: {actual}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use bytekit_testkit::generators::{seed, pull_sizes};
//! use bytekit_testkit::fixtures::pull_plan;
//!
//! proptest! {
//!     #[test]
//!     fn generator_is_reproducible(s in seed(), sizes in pull_sizes()) {
//!         let a = pull_plan(&mut bytekit_core::random_bytes(s), &sizes);
//!         let b = pull_plan(&mut bytekit_core::random_bytes(s), &sizes);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use bytekit_core::limit;
//! use bytekit_testkit::fixtures::{drain, RecordingSource, ScriptedSource};
//!
//! let mut src = limit(RecordingSource::new(ScriptedSource::chunked(b"abcdef", 4)), 5);
//! let (out, _) = drain(&mut src, 8, 16);
//! assert_eq!(out, b"abcde");
//! assert_eq!(src.get_ref().requests(), &[5, 1]);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{drain, pull_plan, RecordingSource, ScriptedSource, Step};
pub use generators::SourcePlan;
pub use vectors::{check_vectors, limit_vectors, verify_all_vectors, CheckVector, LimitVector};
