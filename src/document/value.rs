//! Runtime document values
//!
//! Supported kinds:
//! - null: intentionally absent value
//! - bool: Boolean
//! - int: 64-bit signed integer
//! - double: 64-bit floating point (may carry NaN; NaN never type-checks)
//! - string: UTF-8 string
//! - date: UTC calendar timestamp
//! - bytes: opaque binary buffer
//! - array: ordered sequence
//! - object: insertion-ordered key/value mapping
//! - custom: named instance of a registered user type

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// A document value.
///
/// Objects preserve insertion order so that traversal, and therefore error
/// ordering, is deterministic across runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value; never a type violation by itself
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Double(f64),
    /// UTF-8 string
    String(String),
    /// UTC calendar timestamp
    Date(DateTime<Utc>),
    /// Opaque binary buffer, validated as one whole leaf value
    Bytes(Vec<u8>),
    /// Ordered sequence
    Array(Vec<Value>),
    /// Insertion-ordered mapping
    Object(IndexMap<String, Value>),
    /// Instance of a registered user type
    Custom(CustomValue),
}

/// An instance of a named user type.
///
/// A plain `Value::Object` with identical fields is a different runtime
/// kind and never passes a custom type rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomValue {
    /// Registered type name
    pub type_name: String,
    /// Instance payload
    pub data: Box<Value>,
}

impl Value {
    /// Builds an object value from an ordered list of entries.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Builds an array value.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Builds a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Builds an instance of a registered user type.
    pub fn custom(type_name: impl Into<String>, data: Value) -> Self {
        Value::Custom(CustomValue {
            type_name: type_name.into(),
            data: Box::new(data),
        })
    }

    /// Returns the runtime kind name for error messages.
    pub fn kind_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Custom(c) => &c.type_name,
        }
    }

    /// Returns true for the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the object entries if this is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<serde_json::Value> for Value {
    /// Converts a JSON value. Integers stay integers; u64 values beyond the
    /// i64 range degrade to doubles.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::Bool(true).kind_name(), "bool");
        assert_eq!(Value::Int(1).kind_name(), "int");
        assert_eq!(Value::Double(1.5).kind_name(), "double");
        assert_eq!(Value::string("x").kind_name(), "string");
        assert_eq!(Value::Bytes(vec![1]).kind_name(), "bytes");
        assert_eq!(Value::array(vec![]).kind_name(), "array");
        assert_eq!(Value::object([("a", Value::Int(1))]).kind_name(), "object");
        assert_eq!(Value::Date(Utc::now()).kind_name(), "date");
        assert_eq!(Value::custom("Address", Value::Null).kind_name(), "Address");
    }

    #[test]
    fn test_from_json_preserves_structure() {
        let value = Value::from(json!({
            "name": "Alice",
            "age": 30,
            "score": 99.5,
            "tags": ["a", "b"],
            "meta": { "active": true, "note": null }
        }));

        let obj = value.as_object().unwrap();
        assert_eq!(obj["name"], Value::string("Alice"));
        assert_eq!(obj["age"], Value::Int(30));
        assert_eq!(obj["score"], Value::Double(99.5));
        assert_eq!(
            obj["tags"],
            Value::array(vec![Value::string("a"), Value::string("b")])
        );
        let meta = obj["meta"].as_object().unwrap();
        assert_eq!(meta["active"], Value::Bool(true));
        assert!(meta["note"].is_null());
    }

    #[test]
    fn test_custom_is_not_a_plain_object() {
        let plain = Value::object([("city", Value::string("NYC"))]);
        let custom = Value::custom("Address", plain.clone());
        assert_ne!(plain, custom);
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let value = Value::object([
            ("z", Value::Int(1)),
            ("a", Value::Int(2)),
            ("m", Value::Int(3)),
        ]);
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
