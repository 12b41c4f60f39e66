//! Schema construction errors
//!
//! These are fail-fast configuration failures raised while building a
//! schema. They are deliberately a separate channel from the per-field
//! `ValidationError` records the engine reports for user input.

use thiserror::Error;

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building a schema or type registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A rule declared a union with no candidate types
    #[error("rule for '{path}' declares an empty list of type alternatives")]
    EmptyAlternatives {
        /// Generic path of the offending rule
        path: String,
    },

    /// A rule referenced a custom type the registry does not know
    #[error("rule for '{path}' references unknown custom type '{name}'")]
    UnknownCustomType {
        /// Generic path of the offending rule
        path: String,
        /// The unrecognized type name
        name: String,
    },

    /// A custom type name was registered twice
    #[error("custom type '{0}' is already registered")]
    DuplicateCustomType(String),

    /// Two rules were defined for the same generic path
    #[error("a rule is already defined for '{0}'")]
    DuplicateRule(String),
}
