use super::compaction;
use super::types::{TableProperties, ValidatedTableProperties};
use crate::ddl::DdlResult;
use crate::keywords;
use crate::strategies::StrategyRegistry;
use log::debug;

impl TableProperties {
    /// Check option names and resolve the compaction strategy.
    ///
    /// Fails on the first obsolete or unknown option name, on a non-empty
    /// `compaction` map without `class`, and on a strategy name the registry
    /// cannot resolve. Nothing is written to table metadata here.
    pub fn validate(self, registry: &dyn StrategyRegistry) -> DdlResult<ValidatedTableProperties> {
        debug!("Validating {}", self);

        self.properties
            .validate(keywords::recognized(), keywords::obsolete())?;

        let compaction = compaction::resolve(&self.properties, registry)?;
        if let Some(strategy) = &compaction.strategy {
            debug!("Compaction strategy resolved to {}", strategy);
        }

        Ok(ValidatedTableProperties {
            properties: self.properties,
            default_compressor: self.default_compressor,
            compaction,
        })
    }
}
