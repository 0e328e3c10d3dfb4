//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crate::fixtures::ScriptedSource;

/// Generate a generator seed. Every `i64` is valid.
pub fn seed() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Generate a byte budget.
pub fn budget(max: u64) -> impl Strategy<Value = u64> {
    0u64..=max
}

/// Generate a buffer length for a single pull (never zero).
pub fn buf_len() -> impl Strategy<Value = usize> {
    1usize..=97
}

/// Generate a sequence of pull sizes, zero included.
pub fn pull_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..=64, 0..=16)
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a line that passes the default rules.
pub fn passing_line() -> impl Strategy<Value = String> {
    "[a-z]{1,5} [a-z]{1,5} [a-z]{1,5}".prop_map(String::from)
}

/// Generate an arbitrary line of letters, digits, and spaces.
pub fn any_line() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,40}".prop_map(String::from)
}

/// Parameters for a finite scripted source.
#[derive(Debug, Clone)]
pub struct SourcePlan {
    pub data: Vec<u8>,
    pub chunk: usize,
}

impl SourcePlan {
    /// Build the scripted source this plan describes.
    pub fn source(&self) -> ScriptedSource {
        ScriptedSource::chunked(&self.data, self.chunk)
    }
}

impl Arbitrary for SourcePlan {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (payload(256), 1usize..=32)
            .prop_map(|(data, chunk)| SourcePlan { data, chunk })
            .boxed()
    }
}
