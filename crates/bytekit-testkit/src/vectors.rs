//! Golden vectors for line checks and bounded reads.
//!
//! These pin the exact text of aggregated failure descriptions and the exact
//! bytes a bounded source delivers.

use bytekit_check::check_line;
use bytekit_core::limit;

use crate::fixtures::{drain, ScriptedSource};

/// A golden line-check vector.
#[derive(Debug, Clone)]
pub struct CheckVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Line under test.
    pub input: &'static str,
    /// Expected failure description, or `None` if the line passes.
    pub expected: Option<&'static str>,
}

/// A golden bounded-read vector.
#[derive(Debug, Clone)]
pub struct LimitVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Bytes the inner source offers.
    pub data: &'static [u8],
    /// Largest chunk the inner source hands out per pull.
    pub chunk: usize,
    /// Byte budget.
    pub budget: u64,
    /// Expected output (hex).
    pub expected_hex: &'static str,
}

/// Get all line-check vectors.
pub fn check_vectors() -> Vec<CheckVector> {
    vec![
        CheckVector {
            name: "passes every rule",
            input: "a b c",
            expected: None,
        },
        CheckVector {
            name: "too few spaces only",
            input: "hello",
            expected: Some("no 2 spaces"),
        },
        CheckVector {
            name: "digits and spacing",
            input: "abc123",
            expected: Some("found numbers;no 2 spaces"),
        },
        CheckVector {
            name: "length, digits, spacing in order",
            input: "1234567890 1234567890",
            expected: Some("Line is too long;found numbers;no 2 spaces"),
        },
        CheckVector {
            name: "too long but otherwise fine",
            input: "a long line with plenty of spaces",
            expected: Some("Line is too long"),
        },
        CheckVector {
            name: "nineteen characters",
            input: "abcdefg hijkl mnopq",
            expected: None,
        },
        CheckVector {
            name: "empty line",
            input: "",
            expected: Some("no 2 spaces"),
        },
    ]
}

/// Get all bounded-read vectors.
pub fn limit_vectors() -> Vec<LimitVector> {
    vec![
        LimitVector {
            name: "four bytes of text",
            data: b"some io.Reader stream to be read\n",
            chunk: 64,
            budget: 4,
            expected_hex: "736f6d65",
        },
        LimitVector {
            name: "four bytes in single-byte pulls",
            data: b"some io.Reader stream to be read\n",
            chunk: 1,
            budget: 4,
            expected_hex: "736f6d65",
        },
        LimitVector {
            name: "budget larger than source",
            data: b"abc",
            chunk: 2,
            budget: 10,
            expected_hex: "616263",
        },
        LimitVector {
            name: "zero budget",
            data: b"abc",
            chunk: 2,
            budget: 0,
            expected_hex: "",
        },
    ]
}

/// Run one bounded-read vector and return the delivered bytes as hex.
pub fn run_limit_vector(vector: &LimitVector) -> String {
    let inner = ScriptedSource::chunked(vector.data, vector.chunk);
    let (out, _) = drain(&mut limit(inner, vector.budget), 8, 1024);
    hex::encode(out)
}

/// Run every vector and report `(name, matches, actual)` for each.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let checks = check_vectors().into_iter().map(|v| {
        let actual = match check_line(v.input) {
            Ok(()) => None,
            Err(failures) => Some(failures.to_string()),
        };
        let matches = actual.as_deref() == v.expected;
        (v.name.to_string(), matches, actual.unwrap_or_default())
    });

    let limits = limit_vectors().into_iter().map(|v| {
        let actual = run_limit_vector(&v);
        (v.name.to_string(), actual == v.expected_hex, actual)
    });

    checks.chain(limits).collect()
}
