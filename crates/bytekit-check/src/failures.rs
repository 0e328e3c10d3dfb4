//! Aggregated failures: many independent reasons reported as one error.

use std::fmt;

/// A non-empty, ordered set of failure reasons.
///
/// The order is the order in which the reasons were recorded. An empty set
/// is not a failure, so there is no way to build one: [`Failures::from_vec`]
/// and [`FailureCollector::finish`] turn "nothing recorded" into success.
///
/// `Display` joins every reason with [`Failures::SEPARATOR`].
///
/// ```
/// use bytekit_check::Failures;
///
/// assert!(Failures::<String>::from_vec(vec![]).is_none());
///
/// let failures = Failures::from_vec(vec!["too long", "no digits"]).unwrap();
/// assert_eq!(failures.to_string(), "too long;no digits");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failures<E> {
    reasons: Vec<E>,
}

impl<E> Failures<E> {
    /// Delimiter placed between reasons in the combined description.
    pub const SEPARATOR: &'static str = ";";

    /// Wrap `reasons`, or return `None` if there are none.
    pub fn from_vec(reasons: Vec<E>) -> Option<Self> {
        if reasons.is_empty() {
            None
        } else {
            Some(Self { reasons })
        }
    }

    /// A set holding exactly one reason.
    pub fn single(reason: E) -> Self {
        Self {
            reasons: vec![reason],
        }
    }

    /// Number of reasons. Always at least one.
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first recorded reason.
    pub fn first(&self) -> &E {
        &self.reasons[0]
    }

    /// Iterate reasons in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.reasons.iter()
    }

    /// Reasons as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.reasons
    }

    /// Unwrap into the underlying reasons.
    pub fn into_vec(self) -> Vec<E> {
        self.reasons
    }
}

impl<E: fmt::Display> fmt::Display for Failures<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reason) in self.reasons.iter().enumerate() {
            if i > 0 {
                f.write_str(Self::SEPARATOR)?;
            }
            write!(f, "{reason}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for Failures<E> {}

impl<E> IntoIterator for Failures<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Failures<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.iter()
    }
}

/// Accumulates reasons while a set of rules runs.
///
/// Rules record into the collector unconditionally; [`finish`](Self::finish)
/// decides between success and a [`Failures`] value.
#[derive(Debug, Clone)]
pub struct FailureCollector<E> {
    reasons: Vec<E>,
}

impl<E> FailureCollector<E> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self {
            reasons: Vec::new(),
        }
    }

    /// Record a reason.
    pub fn push(&mut self, reason: E) {
        self.reasons.push(reason);
    }

    /// Record `reason` if `failed` holds.
    pub fn check(&mut self, failed: bool, reason: impl FnOnce() -> E) {
        if failed {
            self.reasons.push(reason());
        }
    }

    /// Number of reasons recorded so far.
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    /// `Ok(())` if nothing was recorded, otherwise every reason in order.
    pub fn finish(self) -> Result<(), Failures<E>> {
        match Failures::from_vec(self.reasons) {
            None => Ok(()),
            Some(failures) => Err(failures),
        }
    }
}

impl<E> Default for FailureCollector<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for FailureCollector<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.reasons.extend(iter);
    }
}
