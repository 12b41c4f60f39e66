//! Type matching
//!
//! One recursive decision procedure reconciling an observed value against a
//! declared type. Matching is exact by kind, never by coercibility: "true"
//! is not a boolean, 0 is not false, and a numeric-looking string is not a
//! number.

use crate::document::Value;
use crate::schema::{SchemaType, TypeRegistry};

/// Decides whether a value satisfies a declared type.
#[derive(Debug, Clone, Copy)]
pub struct TypeMatcher<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> TypeMatcher<'a> {
    /// Creates a matcher over the given user type registry.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Tests `value` against `expected`. Never panics for rules that
    /// passed schema construction.
    ///
    /// An array rule only asserts "this is a sequence" (empty always
    /// matches); element types are enforced by the traverser as it
    /// descends, so sparse and partially-updated arrays check
    /// element-by-element.
    pub fn matches(&self, expected: &SchemaType, value: &Value) -> bool {
        match expected {
            SchemaType::String => matches!(value, Value::String(_)),
            SchemaType::Boolean => matches!(value, Value::Bool(_)),
            SchemaType::Integer => match value {
                Value::Int(_) => true,
                Value::Double(d) => d.is_finite() && d.fract() == 0.0,
                _ => false,
            },
            SchemaType::Number => match value {
                Value::Int(_) => true,
                // NaN and infinities are type violations, not numbers
                Value::Double(d) => d.is_finite(),
                _ => false,
            },
            SchemaType::Date => matches!(value, Value::Date(_)),
            SchemaType::Bytes => matches!(value, Value::Bytes(_)),
            SchemaType::Object => matches!(value, Value::Object(_)),
            SchemaType::Array { .. } => matches!(value, Value::Array(_)),
            SchemaType::Custom { name } => self.registry.is_instance(name, value),
            SchemaType::OneOf { alternatives } => alternatives
                .iter()
                .any(|alternative| self.matches(alternative, value)),
        }
    }
}
