//! Object identifiers and their key-string form

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a domain object within the object graph
///
/// Equality, hashing and ordering are structural over `(namespace, key)`.
/// The empty namespace is valid and is the default for user-created objects.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectIdentifier {
    /// Namespace, typically naming the persistence provider
    pub namespace: String,

    /// Key, unique within the namespace
    pub key: String,
}

impl ObjectIdentifier {
    /// Create a new identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use orbit_domain::ObjectIdentifier;
    ///
    /// let id = ObjectIdentifier::new("mct", "myItems");
    /// assert_eq!(id.to_string(), "mct:myItems");
    /// ```
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Parse a key string of the form `namespace:key`
    ///
    /// A backslash escapes the character that follows it. The first
    /// unescaped `:` ends the namespace; without one, the whole input is the
    /// key and the namespace is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use orbit_domain::ObjectIdentifier;
    ///
    /// let id = ObjectIdentifier::parse("mct:myItems");
    /// assert_eq!(id, ObjectIdentifier::new("mct", "myItems"));
    ///
    /// let bare = ObjectIdentifier::parse("mine");
    /// assert_eq!(bare, ObjectIdentifier::new("", "mine"));
    /// ```
    pub fn parse(key_string: &str) -> Self {
        let mut namespace = String::new();
        let mut chars = key_string.chars();
        let mut escaped = false;

        while let Some(c) = chars.next() {
            if escaped {
                namespace.push(c);
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                ':' => return Self::new(namespace, chars.as_str()),
                _ => namespace.push(c),
            }
        }

        // No separator: everything read so far was the key.
        Self::new(String::new(), namespace)
    }

    /// Whether the identifier has a non-empty namespace
    pub fn has_namespace(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            // A bare key that `parse` would split or unescape needs an explicit empty namespace
            if self.key.contains([':', '\\']) {
                return write!(f, ":{}", self.key);
            }
            return write!(f, "{}", self.key);
        }
        for c in self.namespace.chars() {
            if c == ':' || c == '\\' {
                write!(f, "\\")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ":{}", self.key)
    }
}

impl std::str::FromStr for ObjectIdentifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self::parse(s);
        if id.key.is_empty() {
            return Err(format!("Identifier has an empty key: {:?}", s));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = ObjectIdentifier::new("mct", "myItems");
        let b = ObjectIdentifier::new(String::from("mct"), String::from("myItems"));
        assert_eq!(a, b);
        assert_ne!(a, ObjectIdentifier::new("mct", "other"));
        assert_ne!(a, ObjectIdentifier::new("", "myItems"));
    }

    #[test]
    fn test_display_without_namespace() {
        let id = ObjectIdentifier::new("", "mine");
        assert_eq!(id.to_string(), "mine");
        assert!(!id.has_namespace());
    }

    #[test]
    fn test_escaped_namespace() {
        let id = ObjectIdentifier::new("a:b", "c");
        assert_eq!(id.to_string(), "a\\:b:c");
        assert_eq!(ObjectIdentifier::parse("a\\:b:c"), id);
    }

    #[test]
    fn test_bare_key_with_separator_keeps_empty_namespace() {
        let id = ObjectIdentifier::new("", "a:b");
        assert_eq!(id.to_string(), ":a:b");
        assert_eq!(ObjectIdentifier::parse(&id.to_string()), id);

        let escaped = ObjectIdentifier::new("", "a\\b");
        assert_eq!(escaped.to_string(), ":a\\b");
        assert_eq!(ObjectIdentifier::parse(&escaped.to_string()), escaped);
    }

    #[test]
    fn test_key_may_contain_colons() {
        let id = ObjectIdentifier::parse("ns:key:with:colons");
        assert_eq!(id.namespace, "ns");
        assert_eq!(id.key, "key:with:colons");
    }

    #[test]
    fn test_from_str_rejects_empty_key() {
        assert!("ns:".parse::<ObjectIdentifier>().is_err());
        assert!("".parse::<ObjectIdentifier>().is_err());
        assert!("ns:k".parse::<ObjectIdentifier>().is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let id = ObjectIdentifier::new("mct", "myItems");
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!({"namespace": "mct", "key": "myItems"}));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: key strings round-trip for any namespace and a key
        #[test]
        fn test_key_string_roundtrip(namespace in "[a-z:\\\\]{0,8}", key in "[a-zA-Z0-9:\\\\]{1,12}") {
            let id = ObjectIdentifier::new(namespace, key);
            prop_assert_eq!(ObjectIdentifier::parse(&id.to_string()), id);
        }

        /// Property: ordering is lexicographic over (namespace, key)
        #[test]
        fn test_ordering_property(a in "[a-c]{0,3}", b in "[a-c]{0,3}", k in "[x-z]{1,3}") {
            let id_a = ObjectIdentifier::new(a.clone(), k.clone());
            let id_b = ObjectIdentifier::new(b.clone(), k);
            prop_assert_eq!(id_a < id_b, a < b);
        }
    }
}
