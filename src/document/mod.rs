//! Document model for veridoc
//!
//! Documents are in-memory tree-shaped values. The model is deliberately
//! wider than JSON: dates, binary buffers, NaN-capable doubles and named
//! custom instances are distinct runtime kinds, because type checking is
//! exact by kind and must never confuse a date with an epoch number or a
//! custom instance with a structurally similar plain object.

mod path;
mod value;

pub use path::{FieldPath, WILDCARD};
pub use value::{CustomValue, Value};
