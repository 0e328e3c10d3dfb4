//! Line rules: independent checks on a line of text.
//!
//! Every rule runs on every input. A line that breaks several rules gets one
//! [`Failures`] value listing each broken rule in evaluation order:
//! length, digits, spacing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConfigError;
use crate::failures::{FailureCollector, Failures};

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    /// The line has at least `limit` characters.
    #[error("Line is too long")]
    TooLong { limit: usize },

    /// The line contains an ASCII digit.
    #[error("found numbers")]
    FoundDigits,

    /// The line has fewer than `min` spaces.
    #[error("no {min} spaces")]
    TooFewSpaces { min: usize, found: usize },
}

/// Thresholds for [`LineRules::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineRules {
    /// Lines must be shorter than this many characters.
    pub char_limit: usize,
    /// Reject lines containing `0`-`9`.
    pub forbid_digits: bool,
    /// Lines must contain at least this many spaces.
    pub min_spaces: usize,
}

impl Default for LineRules {
    fn default() -> Self {
        Self {
            char_limit: 20,
            forbid_digits: true,
            min_spaces: 2,
        }
    }
}

impl LineRules {
    /// Load rules from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Self = serde_json::from_str(json)?;
        if rules.char_limit == 0 {
            return Err(ConfigError::Invalid("char_limit must be at least 1".into()));
        }
        Ok(rules)
    }

    /// Run every rule against `input`.
    ///
    /// Returns `Ok(())` only if all rules pass; otherwise every violation,
    /// in evaluation order.
    pub fn check(&self, input: &str) -> Result<(), Failures<Violation>> {
        let mut spaces = 0;
        let mut has_digit = false;
        for ch in input.chars() {
            if ch == ' ' {
                spaces += 1;
            } else if ch.is_ascii_digit() {
                has_digit = true;
            }
        }

        let mut failures = FailureCollector::new();
        failures.check(input.chars().count() >= self.char_limit, || {
            Violation::TooLong {
                limit: self.char_limit,
            }
        });
        failures.check(self.forbid_digits && has_digit, || Violation::FoundDigits);
        failures.check(spaces < self.min_spaces, || Violation::TooFewSpaces {
            min: self.min_spaces,
            found: spaces,
        });

        tracing::debug!(violations = failures.len(), "line checked");
        failures.finish()
    }
}

/// Check `input` against the default [`LineRules`].
pub fn check_line(input: &str) -> Result<(), Failures<Violation>> {
    LineRules::default().check(input)
}
