//! Schema rule table
//!
//! One rule per generic field path. Rules are verified against the type
//! registry as they are defined, so a malformed schema fails at build time
//! and a constructed `SchemaRules` can be shared read-only across
//! concurrent validation runs.

use indexmap::IndexMap;

use super::errors::{SchemaError, SchemaResult};
use super::registry::TypeRegistry;
use super::types::{FieldRule, SchemaType};
use crate::document::{FieldPath, WILDCARD};

/// Read-only mapping from generic field paths to rules.
#[derive(Debug, Default)]
pub struct SchemaRules {
    rules: IndexMap<String, FieldRule>,
    registry: TypeRegistry,
}

impl SchemaRules {
    /// Creates an empty rule table with no user types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty rule table backed by the given user type registry.
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self {
            rules: IndexMap::new(),
            registry,
        }
    }

    /// Defines the rule for a generic path.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule already exists for the path, if the rule
    /// declares an empty alternative list, or if it references a custom
    /// type the registry does not know. These checks recurse through array
    /// element types and union candidates.
    pub fn define(&mut self, path: &str, rule: FieldRule) -> SchemaResult<()> {
        self.check_type(path, &rule.field_type)?;
        if self.rules.contains_key(path) {
            return Err(SchemaError::DuplicateRule(path.to_string()));
        }
        self.rules.insert(path.to_string(), rule);
        Ok(())
    }

    /// Returns the rule for a generic path, if one is defined.
    pub fn rule_for(&self, generic_path: &str) -> Option<&FieldRule> {
        self.rules.get(generic_path)
    }

    /// Returns the element rule for an array field.
    ///
    /// An explicit `path.$` entry wins (this is how sparse arrays mark
    /// their element type optional); otherwise the rule is derived from
    /// the rule that applies at `path`, which may itself be derived, so
    /// nested array types (`Array(Array(T))`) and array alternatives
    /// inside a union yield element rules at every depth.
    pub fn element_rule_for(&self, generic_path: &str) -> Option<FieldRule> {
        let element_path = format!("{}.{}", generic_path, WILDCARD);
        if let Some(rule) = self.rules.get(&element_path) {
            return Some(rule.clone());
        }
        let parent = self.resolve(&FieldPath::parse(generic_path))?;
        parent
            .field_type
            .element_type()
            .cloned()
            .map(FieldRule::required)
    }

    /// Resolves the rule that applies at a generic traversal path.
    ///
    /// A trailing wildcard falls back to element-rule derivation when no
    /// explicit entry exists.
    pub fn resolve(&self, generic_path: &FieldPath) -> Option<FieldRule> {
        let key = generic_path.to_string();
        if let Some(rule) = self.rules.get(&key) {
            return Some(rule.clone());
        }
        if generic_path.last() == Some(WILDCARD) {
            return self.element_rule_for(&generic_path.parent().to_string());
        }
        None
    }

    /// Returns the user type registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Number of defined rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rules are defined.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn check_type(&self, path: &str, field_type: &SchemaType) -> SchemaResult<()> {
        match field_type {
            SchemaType::Array { element_type } => self.check_type(path, element_type),
            SchemaType::Custom { name } => {
                if self.registry.contains(name) {
                    Ok(())
                } else {
                    Err(SchemaError::UnknownCustomType {
                        path: path.to_string(),
                        name: name.clone(),
                    })
                }
            }
            SchemaType::OneOf { alternatives } => {
                if alternatives.is_empty() {
                    return Err(SchemaError::EmptyAlternatives {
                        path: path.to_string(),
                    });
                }
                for alternative in alternatives {
                    self.check_type(path, alternative)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
