//! Validation engine for veridoc
//!
//! # Design Principles
//!
//! - Every violation is reported; nothing short-circuits
//! - Inputs are never mutated
//! - Validation is deterministic: identical inputs yield identical,
//!   identically-ordered error lists
//! - A missing rule is not an error; only fields with rules are checked
//! - Malformed schemas fail at construction, never per value

mod document;
mod errors;
mod matcher;
mod modifier;

pub use errors::{ErrorList, ErrorType, ValidationError};
pub use matcher::TypeMatcher;
pub use modifier::{ModifierOperator, ModifierOptions};

use self::document::DocumentTraverser;
use self::modifier::ModifierTraverser;

use crate::document::Value;
use crate::schema::SchemaRules;

/// Validation engine over one immutable schema.
///
/// Holds no mutable state; concurrent runs against the same schema are
/// safe without locking.
#[derive(Debug)]
pub struct Validator<'a> {
    schema: &'a SchemaRules,
}

impl<'a> Validator<'a> {
    /// Creates a validator backed by the given schema.
    pub fn new(schema: &'a SchemaRules) -> Self {
        Self { schema }
    }

    /// Validates a full document, returning every type violation in
    /// traversal order.
    pub fn validate_document(&self, document: &Value) -> Vec<ValidationError> {
        let mut errors = ErrorList::new();
        DocumentTraverser::new(self.schema).traverse(document, &mut errors);
        tracing::debug!(errors = errors.len(), "document validated");
        errors.into_vec()
    }

    /// Validates an update modifier, returning every type violation in
    /// encounter order.
    pub fn validate_modifier(
        &self,
        modifier: &Value,
        options: &ModifierOptions,
    ) -> Vec<ValidationError> {
        let mut errors = ErrorList::new();
        ModifierTraverser::new(self.schema).traverse(modifier, options, &mut errors);
        tracing::debug!(
            errors = errors.len(),
            is_upsert = options.is_upsert,
            "modifier validated"
        );
        errors.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldRule, SchemaType};

    #[test]
    fn test_validate_document_is_idempotent() {
        let mut rules = SchemaRules::new();
        rules
            .define("n", FieldRule::required(SchemaType::Number))
            .unwrap();
        let validator = Validator::new(&rules);
        let doc = Value::object([("n", Value::string("one"))]);

        let first = validator.validate_document(&doc);
        let second = validator.validate_document(&doc);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_validate_modifier_default_options() {
        let mut rules = SchemaRules::new();
        rules
            .define("n", FieldRule::required(SchemaType::Number))
            .unwrap();
        let validator = Validator::new(&rules);
        let modifier = Value::object([("$set", Value::object([("n", Value::Int(1))]))]);
        assert!(validator
            .validate_modifier(&modifier, &ModifierOptions::default())
            .is_empty());
    }
}
