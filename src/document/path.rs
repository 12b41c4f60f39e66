//! Field paths
//!
//! A concrete path records the keys observed while descending a document,
//! e.g. `enemies.0.traits.1.weight`. The schema stores one rule per generic
//! path, with every array index collapsed to the wildcard marker:
//! `enemies.$.traits.$.weight`. Collapsing is pure syntactic normalization;
//! no schema lookup happens here.

use std::fmt;

/// Wildcard marker standing in for any array index in a generic path.
pub const WILDCARD: &str = "$";

/// An immutable dotted field path.
///
/// Appending returns a new path, so sibling branches of a recursive walk
/// can never alias each other's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The empty path, addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a dotted path. The empty string parses to the root path.
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self {
            segments: dotted.split('.').map(str::to_string).collect(),
        }
    }

    /// Returns a new path with `key` appended.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    /// Returns a new path with an array index appended.
    pub fn index(&self, idx: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(idx.to_string());
        Self { segments }
    }

    /// Collapses every purely-numeric segment to the wildcard marker.
    ///
    /// Idempotent: a path that is already generic comes back unchanged.
    pub fn to_generic(&self) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|seg| {
                    if is_numeric(seg) {
                        WILDCARD.to_string()
                    } else {
                        seg.clone()
                    }
                })
                .collect(),
        }
    }

    /// Returns true for the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the final segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns the path without its final segment.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }
}

/// True for non-empty, purely-decimal segments (array indices).
fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_numeric_segments() {
        let path = FieldPath::parse("enemies.0.traits.1.weight");
        assert_eq!(path.to_generic().to_string(), "enemies.$.traits.$.weight");
    }

    #[test]
    fn test_generic_is_idempotent() {
        let generic = FieldPath::parse("enemies.$.traits.$.weight");
        assert_eq!(generic.to_generic(), generic);
    }

    #[test]
    fn test_non_numeric_segments_unchanged() {
        let path = FieldPath::parse("a.b2.3c.007");
        assert_eq!(path.to_generic().to_string(), "a.b2.3c.$");
    }

    #[test]
    fn test_append_returns_new_path() {
        let base = FieldPath::parse("arr");
        let left = base.index(0);
        let right = base.index(1);
        assert_eq!(base.to_string(), "arr");
        assert_eq!(left.to_string(), "arr.0");
        assert_eq!(right.to_string(), "arr.1");
    }

    #[test]
    fn test_root_round_trip() {
        assert!(FieldPath::parse("").is_root());
        assert_eq!(FieldPath::root().to_string(), "");
        assert_eq!(FieldPath::root().child("a").to_string(), "a");
    }

    #[test]
    fn test_parent_and_last() {
        let path = FieldPath::parse("a.b.$");
        assert_eq!(path.last(), Some("$"));
        assert_eq!(path.parent().to_string(), "a.b");
    }
}
