//! Table caching modes.

use crate::errors::{CommonError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which caches a table's reads may populate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Caching {
    All,
    #[default]
    KeysOnly,
    RowsOnly,
    None,
}

impl Caching {
    pub const VALUES: [Caching; 4] = [Caching::All, Caching::KeysOnly, Caching::RowsOnly, Caching::None];

    pub fn as_str(self) -> &'static str {
        match self {
            Caching::All => "ALL",
            Caching::KeysOnly => "KEYS_ONLY",
            Caching::RowsOnly => "ROWS_ONLY",
            Caching::None => "NONE",
        }
    }

    /// Parse a caching mode (case-insensitive).
    pub fn from_string(value: &str) -> Result<Self> {
        let upper = value.to_uppercase();
        Caching::VALUES
            .iter()
            .copied()
            .find(|mode| mode.as_str() == upper)
            .ok_or_else(|| {
                let available: Vec<&str> = Caching::VALUES.iter().map(|m| m.as_str()).collect();
                CommonError::configuration_error(format!(
                    "{} not found, available types: {}.",
                    value,
                    available.join(", ")
                ))
            })
    }
}

impl fmt::Display for Caching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Caching::from_string("ALL").unwrap(), Caching::All);
        assert_eq!(Caching::from_string("keys_only").unwrap(), Caching::KeysOnly);
        assert_eq!(Caching::from_string("Rows_Only").unwrap(), Caching::RowsOnly);
    }

    #[test]
    fn test_from_string_unknown() {
        let err = Caching::from_string("everything").unwrap_err();
        assert!(matches!(err, CommonError::ConfigurationError(_)));
        assert_eq!(
            err.message(),
            "everything not found, available types: ALL, KEYS_ONLY, ROWS_ONLY, NONE."
        );
    }

    #[test]
    fn test_display_parses_back() {
        for mode in Caching::VALUES {
            assert_eq!(Caching::from_string(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_default_is_keys_only() {
        assert_eq!(Caching::default(), Caching::KeysOnly);
    }
}
