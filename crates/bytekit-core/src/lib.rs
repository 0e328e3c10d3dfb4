//! # Bytekit Core
//!
//! Composable byte sources: a capability for pulling bytes, a seeded
//! generator that implements it, and a decorator that bounds any source.
//!
//! This crate performs no I/O of its own. Sources fill caller-provided
//! buffers; [`io`] bridges them to `std::io` when needed.
//!
//! ## Key Types
//!
//! - [`ByteSource`] - The pull capability every stream implements
//! - [`Pull`] - Bytes delivered plus the exhaustion signal
//! - [`Limit`] - Caps the bytes any source can deliver
//! - [`random_bytes`] - Seed-reproducible infinite source
//!
//! ## Example
//!
//! ```rust
//! use bytekit_core::{limit, random_bytes, ByteSource};
//!
//! let mut src = limit(random_bytes(2024), 10);
//! let mut buf = [0u8; 4];
//! let mut total = 0;
//! loop {
//!     let pull = src.pull(&mut buf).unwrap();
//!     total += pull.count;
//!     if pull.exhausted {
//!         break;
//!     }
//! }
//! assert_eq!(total, 10);
//! ```

pub mod error;
pub mod generator;
pub mod io;
pub mod limit;
pub mod source;

pub use error::{Result, StreamError};
pub use generator::random_bytes;
pub use io::{ReaderSource, SliceSource, SourceReader};
pub use limit::{limit, Limit};
pub use source::{ByteSource, Pull};
