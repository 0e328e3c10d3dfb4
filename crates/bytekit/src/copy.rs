//! Copy utilities over any [`ByteSource`].
//!
//! These only need the pull capability, never a concrete source type. None of
//! them bound the source for you: copying an infinite source without a
//! [`limit`] never returns.

use std::io::Write;

use bytekit_core::{limit, ByteSource};

use crate::config::DEFAULT_COPY_BUFFER;
use crate::error::{Result, ToolkitError};

/// Pull from `src` until it is exhausted, writing every byte to `sink`.
///
/// Returns the number of bytes copied.
pub fn copy<S, W>(src: &mut S, sink: &mut W) -> Result<u64>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    copy_with_buffer(src, sink, DEFAULT_COPY_BUFFER)
}

/// [`copy`] with an explicit scratch buffer size.
///
/// `sink` is flushed before returning, including when `src` fails partway.
pub fn copy_with_buffer<S, W>(src: &mut S, sink: &mut W, buffer_size: usize) -> Result<u64>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    if buffer_size == 0 {
        return Err(ToolkitError::InvalidArgument(
            "copy buffer size must be non-zero".into(),
        ));
    }

    let mut buf = vec![0u8; buffer_size];
    let mut total = 0u64;
    loop {
        let pull = match src.pull(&mut buf) {
            Ok(pull) => pull,
            Err(e) => {
                if let Err(flush_err) = sink.flush() {
                    tracing::warn!(error = %flush_err, "flush after source failure failed");
                }
                return Err(e.into());
            }
        };
        sink.write_all(&buf[..pull.count])?;
        total += pull.count as u64;
        if pull.exhausted {
            break;
        }
    }
    sink.flush()?;

    tracing::debug!(bytes = total, "copy finished");
    Ok(total)
}

/// Copy at most `n` bytes from `src` to `sink`.
pub fn copy_n<S, W>(src: &mut S, sink: &mut W, n: u64) -> Result<u64>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    copy(&mut limit(src, n), sink)
}

/// Collect everything `src` produces.
pub fn read_to_vec<S: ByteSource + ?Sized>(src: &mut S) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    copy(src, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytekit_core::{random_bytes, SliceSource, StreamError};
    use bytekit_testkit::fixtures::{ScriptedSource, Step};
    use std::io;

    /// Buffers writes until flushed.
    #[derive(Default)]
    struct HeldSink {
        pending: Vec<u8>,
        flushed: Vec<u8>,
    }

    impl Write for HeldSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.pending.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed.append(&mut self.pending);
            Ok(())
        }
    }

    #[test]
    fn test_flushes_when_source_fails() {
        let mut src = ScriptedSource::new([
            Step::Data(b"partial".to_vec()),
            Step::Fail("read failed".into()),
        ]);
        let mut sink = HeldSink::default();

        let err = copy(&mut src, &mut sink).unwrap_err();
        assert!(matches!(err, ToolkitError::Stream(StreamError::Failed(ref m)) if m == "read failed"));
        assert_eq!(sink.flushed, b"partial");
        assert!(sink.pending.is_empty());
    }

    #[test]
    fn test_flushes_on_success() {
        let mut sink = HeldSink::default();
        copy(&mut SliceSource::from_static(b"done"), &mut sink).unwrap();
        assert_eq!(sink.flushed, b"done");
    }

    #[test]
    fn test_copy_n_from_text() {
        let mut src = SliceSource::from_static(b"some io.Reader stream to be read\n");
        let mut out = Vec::new();
        assert_eq!(copy_n(&mut src, &mut out, 4).unwrap(), 4);
        assert_eq!(out, b"some");
        // The source keeps its position; the rest is still there.
        assert_eq!(src.remaining(), 29);
    }

    #[test]
    fn test_copy_n_beyond_source_length() {
        let mut src = SliceSource::from_static(b"short");
        let mut out = Vec::new();
        assert_eq!(copy_n(&mut src, &mut out, 100).unwrap(), 5);
        assert_eq!(out, b"short");
    }

    #[test]
    fn test_copy_small_buffer() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let mut src = SliceSource::new(data.clone());
        let mut out = Vec::new();
        assert_eq!(copy_with_buffer(&mut src, &mut out, 3).unwrap(), 1000);
        assert_eq!(out, data);
    }

    #[test]
    fn test_copy_bounded_generator() {
        let mut src = limit(random_bytes(77), 20_000);
        let mut out = Vec::new();
        assert_eq!(copy(&mut src, &mut out).unwrap(), 20_000);
        assert_eq!(out.len(), 20_000);
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let mut src = SliceSource::from_static(b"x");
        let err = copy_with_buffer(&mut src, &mut Vec::new(), 0).unwrap_err();
        assert!(matches!(err, ToolkitError::InvalidArgument(_)));
    }

    #[test]
    fn test_copy_from_trait_object() {
        let mut src: Box<dyn ByteSource> = Box::new(limit(random_bytes(1), 12));
        assert_eq!(read_to_vec(src.as_mut()).unwrap().len(), 12);
    }
}
