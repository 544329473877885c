use super::{compaction, compression, consistency};
use crate::ddl::{DdlResult, PropertyDefinitions};
use std::collections::HashMap;
use std::fmt;
use tessera_commons::{CompactionStrategyClass, ConsistencyLevel};
use tessera_configs::SchemaSettings;

/// Unvalidated properties of one CREATE/ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct TableProperties {
    pub(super) properties: PropertyDefinitions,
    /// Compressor used when the statement carries no `compression` option
    pub(super) default_compressor: Option<String>,
}

/// Compaction strategy and options resolved during validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompactionConfig {
    /// `None` when the statement has no `compaction` option
    pub strategy: Option<CompactionStrategyClass>,
    /// Sub-options with the `class` key removed
    pub options: HashMap<String, String>,
}

/// Properties that passed validation, ready to be applied to table metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTableProperties {
    pub(super) properties: PropertyDefinitions,
    pub(super) default_compressor: Option<String>,
    pub(super) compaction: CompactionConfig,
}

impl TableProperties {
    pub fn new(properties: PropertyDefinitions, settings: &SchemaSettings) -> Self {
        Self {
            properties,
            default_compressor: settings.default_compressor().map(str::to_string),
        }
    }

    pub fn properties(&self) -> &PropertyDefinitions {
        &self.properties
    }

    /// The `compaction` sub-options as supplied, `class` included.
    pub fn compaction_options(&self) -> DdlResult<HashMap<String, String>> {
        compaction::raw_options(&self.properties)
    }

    pub fn compression_options(&self) -> DdlResult<HashMap<String, String>> {
        compression::options(&self.properties, self.default_compressor.as_deref())
    }

    pub fn consistency_level(&self, key: &str) -> DdlResult<Option<ConsistencyLevel>> {
        consistency::level(&self.properties, key)
    }
}

impl ValidatedTableProperties {
    pub fn properties(&self) -> &PropertyDefinitions {
        &self.properties
    }

    pub fn compaction(&self) -> &CompactionConfig {
        &self.compaction
    }

    pub fn compaction_strategy(&self) -> Option<&CompactionStrategyClass> {
        self.compaction.strategy.as_ref()
    }

    /// The `compaction` sub-options without `class`; empty when none were given.
    pub fn compaction_options(&self) -> &HashMap<String, String> {
        &self.compaction.options
    }

    pub fn compression_options(&self) -> DdlResult<HashMap<String, String>> {
        compression::options(&self.properties, self.default_compressor.as_deref())
    }

    pub fn consistency_level(&self, key: &str) -> DdlResult<Option<ConsistencyLevel>> {
        consistency::level(&self.properties, key)
    }
}

impl fmt::Display for TableProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableProperties({})", self.properties)
    }
}

impl fmt::Display for ValidatedTableProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableProperties({})", self.properties)
    }
}
