//! Modifier traversal
//!
//! A modifier is an update document whose top-level keys are operator
//! names, each mapping field paths to operands. Operators differ in what
//! the operand means:
//! - `$set` assigns a value at the field's path and is validated exactly
//!   like a full-document subtree.
//! - `$setOnInsert` only takes effect on upsert, so it is only validated
//!   when the run is an upsert.
//! - `$push` / `$addToSet` append to an array; the operand is checked
//!   against the ELEMENT type, and an `$each` wrapper checks every listed
//!   element individually. `$slice`, `$position` and `$sort` directives
//!   carry no data and are ignored.
//! - `$pull` / `$pullAll` / `$pop` remove data and can never introduce a
//!   type violation; they are skipped outright.
//!
//! Operator names that are not recognized fall through to `$set`
//! semantics, mirroring the permissive behavior of the update languages
//! this engine validates.

use super::document::{DocumentTraverser, ROOT_PATH};
use super::errors::{ErrorList, ValidationError};
use crate::document::{FieldPath, Value, WILDCARD};
use crate::schema::SchemaRules;

/// Key of the bulk-append wrapper inside a `$push`/`$addToSet` operand.
const EACH_KEY: &str = "$each";

/// Recognized modifier operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierOperator {
    /// `$set`: assign a value at a field path
    Set,
    /// `$setOnInsert`: assign only when the update is an upsert
    SetOnInsert,
    /// `$push`: append one value or an `$each` list to an array
    Push,
    /// `$addToSet`: like `$push` but deduplicating
    AddToSet,
    /// `$pull`: remove matching elements
    Pull,
    /// `$pullAll`: remove all listed elements
    PullAll,
    /// `$pop`: remove from either end
    Pop,
}

impl ModifierOperator {
    /// Maps an operator name to its kind. Unknown names yield `None` and
    /// are validated with `$set` semantics.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "$set" => Some(ModifierOperator::Set),
            "$setOnInsert" => Some(ModifierOperator::SetOnInsert),
            "$push" => Some(ModifierOperator::Push),
            "$addToSet" => Some(ModifierOperator::AddToSet),
            "$pull" => Some(ModifierOperator::Pull),
            "$pullAll" => Some(ModifierOperator::PullAll),
            "$pop" => Some(ModifierOperator::Pop),
            _ => None,
        }
    }

    /// Returns the operator name.
    pub fn name(&self) -> &'static str {
        match self {
            ModifierOperator::Set => "$set",
            ModifierOperator::SetOnInsert => "$setOnInsert",
            ModifierOperator::Push => "$push",
            ModifierOperator::AddToSet => "$addToSet",
            ModifierOperator::Pull => "$pull",
            ModifierOperator::PullAll => "$pullAll",
            ModifierOperator::Pop => "$pop",
        }
    }

    /// True for operators that only remove data.
    pub fn is_removal(&self) -> bool {
        matches!(
            self,
            ModifierOperator::Pull | ModifierOperator::PullAll | ModifierOperator::Pop
        )
    }
}

/// Options for one modifier validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierOptions {
    /// Whether the update may insert, activating `$setOnInsert`
    pub is_upsert: bool,
}

/// Walks a modifier, dispatching per-operator semantics.
pub(crate) struct ModifierTraverser<'a> {
    documents: DocumentTraverser<'a>,
}

impl<'a> ModifierTraverser<'a> {
    pub(crate) fn new(schema: &'a SchemaRules) -> Self {
        Self {
            documents: DocumentTraverser::new(schema),
        }
    }

    /// Validates a modifier. Operators and fields are visited in
    /// encounter order, so output ordering is reproducible.
    pub(crate) fn traverse(
        &self,
        modifier: &Value,
        options: &ModifierOptions,
        errors: &mut ErrorList,
    ) {
        let Value::Object(operators) = modifier else {
            errors.push(ValidationError::expected_type(ROOT_PATH, "object", modifier));
            return;
        };

        for (name, fields) in operators {
            let operator = ModifierOperator::from_name(name);
            match operator {
                Some(op) if op.is_removal() => continue,
                Some(ModifierOperator::SetOnInsert) if !options.is_upsert => continue,
                _ => {}
            }

            // Operator payloads are field-path -> operand mappings;
            // anything else cannot address a field and is skipped.
            let Value::Object(fields) = fields else {
                continue;
            };

            let appends = matches!(
                operator,
                Some(ModifierOperator::Push | ModifierOperator::AddToSet)
            );
            for (field_key, operand) in fields {
                let path = FieldPath::parse(field_key);
                if appends {
                    self.check_append(&path, operand, errors);
                } else {
                    self.documents.walk_value(&path, operand, errors);
                }
            }
        }
    }

    /// Validates a `$push`/`$addToSet` operand against the field's array
    /// element type.
    fn check_append(&self, path: &FieldPath, operand: &Value, errors: &mut ErrorList) {
        if let Value::Object(wrapper) = operand {
            if let Some(each) = wrapper.get(EACH_KEY) {
                // $slice / $position / $sort in the wrapper are directives,
                // not data
                if let Value::Array(elements) = each {
                    for (idx, element) in elements.iter().enumerate() {
                        self.documents.walk_value(&path.index(idx), element, errors);
                    }
                }
                return;
            }
        }
        self.documents.walk_value(&path.child(WILDCARD), operand, errors);
    }
}
