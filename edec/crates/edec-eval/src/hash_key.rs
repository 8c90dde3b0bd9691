//! Hashable-value keys.
//!
//! A [`HashKey`] is the `{type, canonical-string}` pair that identifies
//! a hashable value inside a Set. Two values compare equal as keys iff
//! their HashKeys are equal, which keeps `1` and `"1"` distinct while
//! `1` and `1` collide as intended.

use std::fmt;

/// Key identity for a hashable value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// The value's type tag (e.g. `INT`, `STRING`).
    pub type_tag: &'static str,
    /// Canonical string rendering of the value.
    pub value: String,
}

impl HashKey {
    pub fn new(type_tag: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_tag,
            value: value.into(),
        }
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_tag, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_value_same_key() {
        assert_eq!(HashKey::new("INT", "1"), HashKey::new("INT", "1"));
    }

    #[test]
    fn test_type_tag_distinguishes() {
        assert_ne!(HashKey::new("INT", "1"), HashKey::new("STRING", "1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(HashKey::new("INT", "7").to_string(), "INT:7");
    }
}
