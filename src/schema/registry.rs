//! User type registry
//!
//! Custom types are recognized by predicate, not by structure: a plain
//! object carrying the same field names as an instance is still rejected.
//! The registry is built once alongside the schema and read-only afterward;
//! it is passed into the matcher explicitly rather than living in global
//! state.

use indexmap::IndexMap;
use std::fmt;

use super::errors::{SchemaError, SchemaResult};
use crate::document::Value;

type Predicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Registry of named user types with recognition predicates.
#[derive(Default)]
pub struct TypeRegistry {
    types: IndexMap<String, Predicate>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type recognized by tag: a value is an instance exactly
    /// when it is a custom value carrying this type name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateCustomType` if the name is taken.
    pub fn register(&mut self, name: impl Into<String>) -> SchemaResult<()> {
        let name = name.into();
        let expected = name.clone();
        self.register_matcher(name, move |value| match value {
            Value::Custom(c) => c.type_name == expected,
            _ => false,
        })
    }

    /// Registers a type recognized by a caller-supplied predicate.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateCustomType` if the name is taken.
    pub fn register_matcher<F>(&mut self, name: impl Into<String>, predicate: F) -> SchemaResult<()>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if self.types.contains_key(&name) {
            return Err(SchemaError::DuplicateCustomType(name));
        }
        self.types.insert(name, Box::new(predicate));
        Ok(())
    }

    /// Returns true if a type with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Tests whether `value` is an instance of the named type.
    ///
    /// Unknown names never match; they are rejected earlier, at schema
    /// construction.
    pub fn is_instance(&self, name: &str, value: &Value) -> bool {
        self.types.get(name).is_some_and(|predicate| predicate(value))
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_recognition() {
        let mut registry = TypeRegistry::new();
        registry.register("Address").unwrap();

        let instance = Value::custom("Address", Value::object([("city", Value::string("NYC"))]));
        let other = Value::custom("Person", Value::Null);
        assert!(registry.is_instance("Address", &instance));
        assert!(!registry.is_instance("Address", &other));
    }

    #[test]
    fn test_plain_object_is_not_an_instance() {
        let mut registry = TypeRegistry::new();
        registry.register("Address").unwrap();

        let lookalike = Value::object([("city", Value::string("NYC"))]);
        assert!(!registry.is_instance("Address", &lookalike));
    }

    #[test]
    fn test_custom_predicate() {
        let mut registry = TypeRegistry::new();
        registry
            .register_matcher("NonEmptyBytes", |value| {
                matches!(value, Value::Bytes(b) if !b.is_empty())
            })
            .unwrap();

        assert!(registry.is_instance("NonEmptyBytes", &Value::Bytes(vec![1])));
        assert!(!registry.is_instance("NonEmptyBytes", &Value::Bytes(vec![])));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register("Address").unwrap();
        assert_eq!(
            registry.register("Address"),
            Err(SchemaError::DuplicateCustomType("Address".into()))
        );
    }

    #[test]
    fn test_unknown_name_never_matches() {
        let registry = TypeRegistry::new();
        assert!(!registry.is_instance("Ghost", &Value::Null));
    }
}
