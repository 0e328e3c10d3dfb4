//! Bridges between [`ByteSource`] and `std::io`.

use std::io::{self, Read};

use bytes::{Buf, Bytes};

use crate::error::{Result, StreamError};
use crate::source::{ByteSource, Pull};

/// An in-memory source over a byte buffer.
///
/// Reports exhaustion on the pull that hands out its last byte.
#[derive(Debug, Clone, Default)]
pub struct SliceSource {
    data: Bytes,
}

impl SliceSource {
    /// Create a source over `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Create a source over static bytes without copying.
    pub const fn from_static(data: &'static [u8]) -> Self {
        Self {
            data: Bytes::from_static(data),
        }
    }

    /// Bytes not yet pulled.
    pub fn remaining(&self) -> usize {
        self.data.remaining()
    }
}

impl ByteSource for SliceSource {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        let n = buf.len().min(self.data.remaining());
        self.data.copy_to_slice(&mut buf[..n]);
        Ok(Pull {
            count: n,
            exhausted: !self.data.has_remaining(),
        })
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// A read of zero bytes into a non-empty buffer is end of input.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Unwrap, returning the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        if buf.is_empty() {
            return Ok(Pull::more(0));
        }
        loop {
            match self.reader.read(buf) {
                Ok(0) => return Ok(Pull::EXHAUSTED),
                Ok(n) => return Ok(Pull::more(n)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamError::Io(e)),
            }
        }
    }
}

/// Adapts any [`ByteSource`] into a [`Read`].
///
/// After the source reports exhaustion, `read` returns `Ok(0)`.
#[derive(Debug)]
pub struct SourceReader<S> {
    source: S,
    done: bool,
}

impl<S: ByteSource> SourceReader<S> {
    /// Wrap a source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            done: false,
        }
    }

    /// Unwrap, returning the source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: ByteSource> Read for SourceReader<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        // A zero-count pull that is not exhausted is not end of input.
        while !self.done {
            let pull = self.source.pull(buf).map_err(into_io_error)?;
            self.done = pull.exhausted;
            if pull.count > 0 {
                return Ok(pull.count);
            }
        }
        Ok(0)
    }
}

fn into_io_error(err: StreamError) -> io::Error {
    match err {
        StreamError::Io(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other),
    }
}
