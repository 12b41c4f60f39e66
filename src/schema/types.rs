//! Schema type definitions
//!
//! The logical type taxonomy recognized by the matcher:
//! - string: UTF-8 string
//! - boolean: exact true/false, no truthy coercion
//! - integer: whole number (an integral double also passes)
//! - number: any finite numeric value; NaN never passes
//! - date: calendar timestamp, distinct from a numeric epoch
//! - object: plain key/value mapping
//! - bytes: opaque binary buffer, checked as one whole value
//! - array: homogeneous sequence with a declared element type
//! - custom: named user type recognized by a registry predicate
//! - one_of: ordered union; the first matching alternative wins

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a schema rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemaType {
    /// UTF-8 string
    String,
    /// Exact true/false
    Boolean,
    /// Whole number
    Integer,
    /// Finite numeric value
    Number,
    /// Calendar timestamp
    Date,
    /// Plain key/value mapping
    Object,
    /// Opaque binary buffer
    Bytes,
    /// Homogeneous sequence
    Array {
        /// Declared element type (boxed to allow recursive types)
        element_type: Box<SchemaType>,
    },
    /// Named user type backed by a registry predicate
    Custom {
        /// Registered type name
        name: String,
    },
    /// Ordered union of candidate types
    OneOf {
        /// Candidates, tested in declared order
        alternatives: Vec<SchemaType>,
    },
}

impl SchemaType {
    /// Array-of-T shorthand.
    pub fn array(element_type: SchemaType) -> Self {
        SchemaType::Array {
            element_type: Box::new(element_type),
        }
    }

    /// Named custom type shorthand.
    pub fn custom(name: impl Into<String>) -> Self {
        SchemaType::Custom { name: name.into() }
    }

    /// Union shorthand.
    pub fn one_of(alternatives: Vec<SchemaType>) -> Self {
        SchemaType::OneOf { alternatives }
    }

    /// Returns the declared element type when values of this type are
    /// sequences: the array element type, or the first array alternative
    /// of a union.
    pub fn element_type(&self) -> Option<&SchemaType> {
        match self {
            SchemaType::Array { element_type } => Some(element_type),
            SchemaType::OneOf { alternatives } => {
                alternatives.iter().find_map(SchemaType::element_type)
            }
            _ => None,
        }
    }

    /// True for types whose values are checked as one whole leaf, never
    /// descended into, even when they look like containers. Custom
    /// instances and binary buffers are structurally object- or
    /// sequence-like but must be validated opaquely.
    pub fn is_opaque(&self) -> bool {
        match self {
            SchemaType::Custom { .. } | SchemaType::Bytes => true,
            SchemaType::OneOf { alternatives } => {
                alternatives.iter().any(SchemaType::is_opaque)
            }
            _ => false,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::String => write!(f, "string"),
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::Date => write!(f, "date"),
            SchemaType::Object => write!(f, "object"),
            SchemaType::Bytes => write!(f, "bytes"),
            SchemaType::Array { element_type } => write!(f, "array<{}>", element_type),
            SchemaType::Custom { name } => write!(f, "{}", name),
            SchemaType::OneOf { alternatives } => {
                let names: Vec<String> =
                    alternatives.iter().map(SchemaType::to_string).collect();
                write!(f, "{}", names.join(" | "))
            }
        }
    }
}

/// A per-path rule: declared type plus optionality.
///
/// Optionality only matters to the core for sparse array elements; the
/// required-field pass for inserts lives outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Declared type
    #[serde(flatten)]
    pub field_type: SchemaType,
    /// Whether the field may be absent
    pub optional: bool,
}

impl FieldRule {
    /// Creates a required rule of the given type.
    pub fn required(field_type: SchemaType) -> Self {
        Self {
            field_type,
            optional: false,
        }
    }

    /// Creates an optional rule of the given type.
    pub fn optional(field_type: SchemaType) -> Self {
        Self {
            field_type,
            optional: true,
        }
    }
}
