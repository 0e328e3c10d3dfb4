//! Test sources with scripted behavior.
//!
//! Common building blocks for exercising decorators and copy utilities.

use std::collections::VecDeque;

use bytekit_core::{ByteSource, Pull, Result, StreamError};

/// One scripted step of a [`ScriptedSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Deliver these bytes, possibly across several pulls if the buffer is short.
    Data(Vec<u8>),
    /// Deliver nothing but do not exhaust.
    Idle,
    /// Fail the pull with this message.
    Fail(String),
}

/// A source that follows a fixed script, then exhausts.
///
/// Exhaustion is reported on the pull that delivers the last scripted byte.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    steps: VecDeque<Step>,
    pulls: usize,
}

impl ScriptedSource {
    /// Create a source from a script.
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            pulls: 0,
        }
    }

    /// A source that delivers `data` in chunks of at most `chunk` bytes.
    pub fn chunked(data: &[u8], chunk: usize) -> Self {
        let chunk = chunk.max(1);
        Self::new(data.chunks(chunk).map(|c| Step::Data(c.to_vec())))
    }

    /// A source that fails on its first pull.
    pub fn failing(msg: &str) -> Self {
        Self::new([Step::Fail(msg.to_string())])
    }

    /// Number of pulls made so far.
    pub fn pulls(&self) -> usize {
        self.pulls
    }
}

impl ByteSource for ScriptedSource {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        self.pulls += 1;
        let Some(step) = self.steps.pop_front() else {
            return Ok(Pull::EXHAUSTED);
        };

        match step {
            Step::Idle => Ok(Pull::more(0)),
            Step::Fail(msg) => Err(StreamError::Failed(msg)),
            Step::Data(mut data) => {
                let n = buf.len().min(data.len());
                buf[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    self.steps.push_front(Step::Data(data.split_off(n)));
                }
                Ok(Pull {
                    count: n,
                    exhausted: self.steps.is_empty(),
                })
            }
        }
    }
}

/// Wraps a source and records every buffer length it is asked to fill.
#[derive(Debug)]
pub struct RecordingSource<S> {
    inner: S,
    requests: Vec<usize>,
    delivered: u64,
}

impl<S: ByteSource> RecordingSource<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            requests: Vec::new(),
            delivered: 0,
        }
    }

    /// Requested lengths, in order.
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }

    /// Total bytes the inner source delivered.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Whether the source has been pulled at all.
    pub fn was_consulted(&self) -> bool {
        !self.requests.is_empty()
    }
}

impl<S: ByteSource> ByteSource for RecordingSource<S> {
    fn pull(&mut self, buf: &mut [u8]) -> Result<Pull> {
        self.requests.push(buf.len());
        let pull = self.inner.pull(buf)?;
        self.delivered += pull.count as u64;
        Ok(pull)
    }
}

/// Pull `src` with a fixed buffer size until it exhausts.
///
/// Returns the bytes and the number of pulls made. Panics if the source
/// fails or does not exhaust within `max_pulls`.
pub fn drain<S: ByteSource + ?Sized>(src: &mut S, buf_len: usize, max_pulls: usize) -> (Vec<u8>, usize) {
    let mut out = Vec::new();
    let mut buf = vec![0u8; buf_len];
    for pulls in 1..=max_pulls {
        let pull = src.pull(&mut buf).expect("source failed while draining");
        out.extend_from_slice(&buf[..pull.count]);
        if pull.exhausted {
            return (out, pulls);
        }
    }
    panic!("source not exhausted after {max_pulls} pulls");
}

/// Pull `src` once per entry of `sizes`, concatenating the output.
pub fn pull_plan<S: ByteSource + ?Sized>(src: &mut S, sizes: &[usize]) -> Vec<u8> {
    let mut out = Vec::new();
    for &size in sizes {
        let mut buf = vec![0u8; size];
        let pull = src.pull(&mut buf).expect("source failed during pull plan");
        out.extend_from_slice(&buf[..pull.count]);
    }
    out
}
