//! Document traversal
//!
//! Recursive walk of a full document: objects descend per key, arrays per
//! element with the index folded into the path, and every leaf is checked
//! against the rule at its generic path. The walk never mutates its input
//! and is a pure function of document and schema, so repeated runs yield
//! identical, identically-ordered error lists.

use indexmap::IndexMap;

use super::errors::{ErrorList, ValidationError};
use super::matcher::TypeMatcher;
use crate::document::{FieldPath, Value};
use crate::schema::SchemaRules;

/// Path reported when the validation root is not an object at all.
pub(crate) const ROOT_PATH: &str = "$root";

/// Walks documents against a schema, accumulating one error per violation.
pub(crate) struct DocumentTraverser<'a> {
    schema: &'a SchemaRules,
    matcher: TypeMatcher<'a>,
}

impl<'a> DocumentTraverser<'a> {
    pub(crate) fn new(schema: &'a SchemaRules) -> Self {
        Self {
            schema,
            matcher: TypeMatcher::new(schema.registry()),
        }
    }

    /// Validates a full document from the root.
    pub(crate) fn traverse(&self, document: &Value, errors: &mut ErrorList) {
        match document {
            Value::Object(map) => self.walk_object(&FieldPath::root(), map, errors),
            other => errors.push(ValidationError::expected_type(ROOT_PATH, "object", other)),
        }
    }

    fn walk_object(
        &self,
        path: &FieldPath,
        map: &IndexMap<String, Value>,
        errors: &mut ErrorList,
    ) {
        for (key, value) in map {
            self.walk_value(&path.child(key), value, errors);
        }
    }

    /// Validates one value at its concrete path, descending into
    /// containers.
    ///
    /// Null is treated as intentionally absent and never reported here;
    /// required-field enforcement lives outside the engine. A container
    /// value is NOT descended into when its rule involves a custom or
    /// binary type, because such values are checked as one opaque leaf.
    pub(crate) fn walk_value(&self, path: &FieldPath, value: &Value, errors: &mut ErrorList) {
        if value.is_null() {
            return;
        }

        let generic = path.to_generic();
        let rule = self.schema.resolve(&generic);

        if let Some(rule) = &rule {
            if !self.matcher.matches(&rule.field_type, value) {
                errors.push(ValidationError::expected_type(
                    generic.to_string(),
                    rule.field_type.to_string(),
                    value,
                ));
            }
            if rule.field_type.is_opaque() {
                return;
            }
        }

        match value {
            Value::Object(map) => self.walk_object(path, map, errors),
            Value::Array(items) => {
                for (idx, element) in items.iter().enumerate() {
                    self.walk_value(&path.index(idx), element, errors);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldRule, SchemaType, TypeRegistry};

    fn errors_for(rules: &SchemaRules, document: &Value) -> Vec<ValidationError> {
        let mut errors = ErrorList::new();
        DocumentTraverser::new(rules).traverse(document, &mut errors);
        errors.into_vec()
    }

    fn simple_rules() -> SchemaRules {
        let mut rules = SchemaRules::new();
        rules
            .define("name", FieldRule::required(SchemaType::String))
            .unwrap();
        rules
            .define("age", FieldRule::required(SchemaType::Integer))
            .unwrap();
        rules
    }

    #[test]
    fn test_all_violations_reported_not_just_first() {
        let rules = simple_rules();
        let doc = Value::object([
            ("name", Value::Int(5)),
            ("age", Value::string("ten")),
        ]);

        let errors = errors_for(&rules, &doc);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field_path, "name");
        assert_eq!(errors[1].field_path, "age");
    }

    #[test]
    fn test_field_without_rule_is_ignored() {
        let rules = simple_rules();
        let doc = Value::object([
            ("name", Value::string("Alice")),
            ("unlisted", Value::Bool(true)),
        ]);
        assert!(errors_for(&rules, &doc).is_empty());
    }

    #[test]
    fn test_null_leaf_is_never_a_type_violation() {
        let rules = simple_rules();
        let doc = Value::object([("name", Value::Null)]);
        assert!(errors_for(&rules, &doc).is_empty());
    }

    #[test]
    fn test_array_elements_use_wildcard_path() {
        let mut rules = SchemaRules::new();
        rules
            .define("tags", FieldRule::required(SchemaType::array(SchemaType::String)))
            .unwrap();

        let doc = Value::object([(
            "tags",
            Value::array(vec![Value::string("ok"), Value::Int(1), Value::Int(2)]),
        )]);

        let errors = errors_for(&rules, &doc);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.field_path == "tags.$"));
    }

    #[test]
    fn test_opaque_custom_value_is_not_descended() {
        let mut registry = TypeRegistry::new();
        registry.register("Address").unwrap();
        let mut rules = SchemaRules::with_registry(registry);
        rules
            .define("home", FieldRule::required(SchemaType::custom("Address")))
            .unwrap();
        // a rule under the custom value must never fire
        rules
            .define("home.city", FieldRule::required(SchemaType::Integer))
            .unwrap();

        let doc = Value::object([(
            "home",
            Value::custom("Address", Value::object([("city", Value::string("NYC"))])),
        )]);
        assert!(errors_for(&rules, &doc).is_empty());

        // a plain object fails the custom rule as one whole leaf
        let doc = Value::object([("home", Value::object([("city", Value::string("NYC"))]))]);
        let errors = errors_for(&rules, &doc);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_path, "home");
    }

    #[test]
    fn test_non_object_root() {
        let rules = simple_rules();
        let errors = errors_for(&rules, &Value::Int(4));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_path, ROOT_PATH);
    }
}
