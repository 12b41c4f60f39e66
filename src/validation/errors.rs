//! Validation error records and the accumulator
//!
//! Violations are data, not `Err` values: a run must report every
//! offending leaf, so the traversers append records to an ordered,
//! append-only list and return the whole set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::Value;

/// Kind of validation error. The type-checking core emits exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    /// The observed value's kind matches no alternative of the rule's
    /// declared type
    ExpectedType,
}

impl ErrorType {
    /// Returns the stable string code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ExpectedType => "EXPECTED_TYPE",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Generic field path of the offending value (e.g. "enemies.$.name")
    pub field_path: String,
    /// Error kind
    pub error_type: ErrorType,
    /// Declared type that was expected
    pub expected: String,
    /// Runtime kind that was observed
    pub actual: String,
    /// The offending value
    pub value: Option<Value>,
}

impl ValidationError {
    /// Builds an EXPECTED_TYPE record for the given value.
    pub fn expected_type(
        field_path: impl Into<String>,
        expected: impl Into<String>,
        value: &Value,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            error_type: ErrorType::ExpectedType,
            expected: expected.into(),
            actual: value.kind_name().to_string(),
            value: Some(value.clone()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field_path, self.expected, self.actual
        )
    }
}

/// Ordered, append-only accumulator of validation errors.
///
/// Records keep the order in which the traversal found them; nothing is
/// deduplicated.
#[derive(Debug, Default)]
pub struct ErrorList {
    errors: Vec<ValidationError>,
}

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record.
    pub fn push(&mut self, error: ValidationError) {
        tracing::trace!(
            field = %error.field_path,
            expected = %error.expected,
            actual = %error.actual,
            "type mismatch"
        );
        self.errors.push(error);
    }

    /// Number of accumulated records.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no violations were found.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the list, yielding records in traversal order.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}
