//! Schema subsystem for veridoc
//!
//! A schema is a read-only mapping from generic field paths to type rules,
//! plus a registry of named user types with recognition predicates. Both
//! are fully checked at construction time: a rule referencing an unknown
//! custom type or declaring an empty alternative list is a configuration
//! error, never a per-value validation error. After construction the
//! mapping is immutable, so concurrent validation runs share it without
//! locking.

mod errors;
mod registry;
mod rules;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::TypeRegistry;
pub use rules::SchemaRules;
pub use types::{FieldRule, SchemaType};
