use std::{error::Error as StdError, fmt, slice};

/// A single validation failure for one schema key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the environment variable.
    pub key: String,
    /// The type descriptor the schema declared for this key, unparsed.
    pub expected: String,
    /// The raw value found in the environment, if any was present.
    pub received: Option<String>,
    /// Human-readable explanation of the failure.
    pub reason: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.reason)
    }
}

impl StdError for ValidationError {}

/// Every failure collected by one validation pass.
///
/// Errors are collected rather than returned one at a time, so a single
/// run names everything that must be fixed.
///
/// # Display Format
///
/// A fixed header followed by one bullet line per failure, in schema
/// declaration order:
///
/// ```text
/// environment validation failed:
/// • PORT: 'abc' is not a valid number
/// • API_KEY: required variable is missing
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "environment validation failed:")?;
        for error in &self.0 {
            write!(f, "\n\u{2022} {error}")?;
        }
        Ok(())
    }
}

impl StdError for ValidationErrors {}
