//! Compaction strategy identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Package prefix of the built-in compaction strategies.
pub const COMPACTION_PACKAGE: &str = "tessera.compaction.";

pub const SIZE_TIERED: &str = "SizeTieredCompactionStrategy";
pub const LEVELED: &str = "LeveledCompactionStrategy";

/// A resolved compaction strategy, identified by its fully-qualified class name.
///
/// Only a strategy registry hands these out, so holding one means the name
/// has already been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompactionStrategyClass(String);

impl CompactionStrategyClass {
    /// Wraps an already-resolved, fully-qualified class name.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }

    pub fn size_tiered() -> Self {
        Self(format!("{}{}", COMPACTION_PACKAGE, SIZE_TIERED))
    }

    pub fn leveled() -> Self {
        Self(format!("{}{}", COMPACTION_PACKAGE, LEVELED))
    }

    pub fn qualified_name(&self) -> &str {
        &self.0
    }

    /// Class name without its package.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for CompactionStrategyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for CompactionStrategyClass {
    fn default() -> Self {
        Self::size_tiered()
    }
}
