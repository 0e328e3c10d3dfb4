//! The byte source capability.
//!
//! A [`ByteSource`] fills a caller-provided buffer with as many bytes as it
//! currently has, reports how many it wrote, and signals when it will never
//! produce another byte.

use crate::error::Result;

/// Outcome of a single [`ByteSource::pull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pull {
    /// Number of bytes written to the front of the buffer.
    pub count: usize,
    /// No further bytes will ever be produced.
    pub exhausted: bool,
}

impl Pull {
    /// Nothing delivered, nothing left.
    pub const EXHAUSTED: Self = Self {
        count: 0,
        exhausted: true,
    };

    /// `count` bytes delivered, more may follow.
    pub const fn more(count: usize) -> Self {
        Self {
            count,
            exhausted: false,
        }
    }

    /// `count` bytes delivered and the source is now exhausted.
    pub const fn last(count: usize) -> Self {
        Self {
            count,
            exhausted: true,
        }
    }

    /// Check whether the source reported exhaustion.
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// A readable byte stream.
///
/// # Contract
///
/// - `count <= buf.len()`, and only `buf[..count]` is written.
/// - Once a pull reports `exhausted`, the source produces no more bytes.
///   Bytes and exhaustion may arrive in the same pull.
/// - Sources are not required to be restartable.
pub trait ByteSource {
    /// Fill up to `buf.len()` bytes.
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        (**self).pull(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        (**self).pull(buf)
    }
}
