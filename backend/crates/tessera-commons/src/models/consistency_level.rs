//! Consistency levels for reads and writes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many replicas must acknowledge a request before it is considered successful.
///
/// Tokens are matched exactly (`"QUORUM"`, not `"quorum"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsistencyLevel {
    /// A write succeeds once any node (hinted handoff included) has it.
    Any,
    #[default]
    One,
    Two,
    Three,
    Quorum,
    All,
    /// Quorum within the coordinator's datacenter.
    LocalQuorum,
    /// Quorum within every datacenter.
    EachQuorum,
}

impl ConsistencyLevel {
    pub const VALUES: [ConsistencyLevel; 8] = [
        ConsistencyLevel::Any,
        ConsistencyLevel::One,
        ConsistencyLevel::Two,
        ConsistencyLevel::Three,
        ConsistencyLevel::Quorum,
        ConsistencyLevel::All,
        ConsistencyLevel::LocalQuorum,
        ConsistencyLevel::EachQuorum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsistencyLevel::Any => "ANY",
            ConsistencyLevel::One => "ONE",
            ConsistencyLevel::Two => "TWO",
            ConsistencyLevel::Three => "THREE",
            ConsistencyLevel::Quorum => "QUORUM",
            ConsistencyLevel::All => "ALL",
            ConsistencyLevel::LocalQuorum => "LOCAL_QUORUM",
            ConsistencyLevel::EachQuorum => "EACH_QUORUM",
        }
    }

    /// Levels whose replica count is computed per datacenter.
    pub fn is_datacenter_aware(self) -> bool {
        matches!(self, ConsistencyLevel::LocalQuorum | ConsistencyLevel::EachQuorum)
    }
}

impl FromStr for ConsistencyLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsistencyLevel::VALUES
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for ConsistencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ConsistencyLevel::from_str("QUORUM"), Ok(ConsistencyLevel::Quorum));
        assert_eq!(
            ConsistencyLevel::from_str("LOCAL_QUORUM"),
            Ok(ConsistencyLevel::LocalQuorum)
        );
        assert!(ConsistencyLevel::from_str("quorum").is_err());
        assert!(ConsistencyLevel::from_str("BOGUS").is_err());
    }

    #[test]
    fn test_round_trip_through_display() {
        for level in ConsistencyLevel::VALUES {
            assert_eq!(level.to_string().parse::<ConsistencyLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_serialization_uses_tokens() {
        let json = serde_json::to_string(&ConsistencyLevel::EachQuorum).unwrap();
        assert_eq!(json, "\"EACH_QUORUM\"");
    }

    #[test]
    fn test_datacenter_aware() {
        assert!(ConsistencyLevel::LocalQuorum.is_datacenter_aware());
        assert!(!ConsistencyLevel::Quorum.is_datacenter_aware());
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(ConsistencyLevel::default(), ConsistencyLevel::One);
    }
}
