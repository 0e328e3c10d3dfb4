//! Bounded source decorator.
//!
//! [`Limit`] wraps any [`ByteSource`] and stops after a fixed byte budget,
//! or earlier if the wrapped source runs dry.

use crate::error::Result;
use crate::source::{ByteSource, Pull};

/// Wrap `inner` so that at most `n` bytes are ever delivered.
///
/// `inner` may be owned, borrowed (`&mut S`), or boxed; limits nest.
///
/// ```
/// use bytekit_core::{limit, random_bytes, ByteSource};
///
/// let mut src = limit(random_bytes(1), 4);
/// let mut buf = [0u8; 16];
/// let pull = src.pull(&mut buf).unwrap();
/// assert_eq!(pull.count, 4);
/// assert!(pull.exhausted);
/// ```
pub fn limit<S: ByteSource>(inner: S, n: u64) -> Limit<S> {
    Limit::new(inner, n)
}

/// A source that delivers at most a fixed number of bytes from `inner`.
///
/// # Invariants
/// - `remaining` only decreases.
/// - `inner` is never asked for more than `remaining` bytes.
/// - Once spent (or once `inner` has reported exhaustion), `inner` is not
///   consulted again and every pull returns [`Pull::EXHAUSTED`].
#[derive(Debug)]
pub struct Limit<S> {
    inner: S,
    remaining: u64,
    inner_exhausted: bool,
}

impl<S: ByteSource> Limit<S> {
    /// Create a decorator with a budget of `n` bytes.
    pub fn new(inner: S, n: u64) -> Self {
        Self {
            inner,
            remaining: n,
            inner_exhausted: false,
        }
    }

    /// Bytes still owed before the budget is spent.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Borrow the wrapped source.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the wrapped source.
    ///
    /// Pulling from it directly does not touch this decorator's budget.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the wrapped source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for Limit<S> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        if self.remaining == 0 || self.inner_exhausted {
            return Ok(Pull::EXHAUSTED);
        }

        let want = usize::try_from(self.remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let pull = self.inner.pull(&mut buf[..want])?;

        let produced = pull.count.min(want);
        self.remaining -= produced as u64;

        if pull.exhausted {
            self.inner_exhausted = true;
            if self.remaining > 0 {
                tracing::trace!(remaining = self.remaining, "inner source exhausted before budget");
            }
        } else if self.remaining == 0 {
            tracing::trace!("byte budget spent");
        }

        Ok(Pull {
            count: produced,
            exhausted: self.remaining == 0 || self.inner_exhausted,
        })
    }
}
