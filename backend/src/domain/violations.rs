//! Ordered aggregate of field validation failures.
//!
//! Validators push one human-readable message per failing check. The
//! aggregate behaves as a single failure value: an empty aggregate means the
//! record is acceptable and is never surfaced as an error.

use std::fmt;

use serde::Serialize;

/// Delimiter used when rendering the aggregate as a flat message.
pub const VIOLATION_DELIMITER: &str = ",";

/// Ordered collection of validation messages.
///
/// Two aggregates are equal when their message sequences are equal.
///
/// # Examples
/// ```
/// use fleet::domain::Violations;
///
/// let mut violations = Violations::new();
/// violations.push("driver name is invalid");
/// violations.push("driver email is invalid");
/// assert_eq!(
///     violations.to_string(),
///     "driver name is invalid,driver email is invalid"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<String>);

impl Violations {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, preserving insertion order.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Append `message` when `failed` holds.
    pub fn check(&mut self, failed: bool, message: &str) {
        if failed {
            self.push(message);
        }
    }

    /// Whether no check has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        self.0.as_slice()
    }

    /// Collapse into `Ok(())` when empty, otherwise fail with `self`.
    ///
    /// # Examples
    /// ```
    /// use fleet::domain::Violations;
    ///
    /// assert!(Violations::new().into_result().is_ok());
    /// ```
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(VIOLATION_DELIMITER))
    }
}

impl std::error::Error for Violations {}

impl From<Vec<String>> for Violations {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

impl<'a> FromIterator<&'a str> for Violations {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}
