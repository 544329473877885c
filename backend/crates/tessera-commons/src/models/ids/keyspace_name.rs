//! Type-safe wrapper for keyspace names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe wrapper for keyspace names.
///
/// Keyspace names are case-sensitive and kept exactly as given, so
/// `KeyspaceName::new("Ks")` and `KeyspaceName::new("ks")` are different keyspaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyspaceName(String);

impl KeyspaceName {
    /// Creates a new KeyspaceName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the keyspace name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for KeyspaceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for KeyspaceName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for KeyspaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyspace_name_is_case_sensitive() {
        assert_ne!(KeyspaceName::new("Ks"), KeyspaceName::new("ks"));
        assert_eq!(KeyspaceName::from("ks"), KeyspaceName::new("ks".to_string()));
    }
}
