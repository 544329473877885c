//! Lookup of pluggable storage strategies by name.
//!
//! Schema statements name compaction strategies and compressors as strings.
//! `StrategyRegistry` turns those names into resolved values so the property
//! pipeline never hardcodes the set of available implementations.

use crate::ddl::{DdlError, DdlResult};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tessera_commons::models::compaction::COMPACTION_PACKAGE;
use tessera_commons::{CompactionStrategyClass, CompressionParameters};

static RE_CLASS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Resolves strategy names used in table options.
pub trait StrategyRegistry: Send + Sync {
    /// Resolve a compaction strategy name (short or package-qualified).
    fn compaction_strategy(&self, name: &str) -> DdlResult<CompactionStrategyClass>;

    /// Build compression parameters from `compression` sub-options.
    fn compression_parameters(
        &self,
        options: &HashMap<String, String>,
    ) -> DdlResult<CompressionParameters>;
}

/// Registry of the strategies shipped with Tessera, extensible with custom
/// compaction strategies.
#[derive(Debug, Clone)]
pub struct BuiltinStrategies {
    compaction: HashMap<String, CompactionStrategyClass>,
}

impl BuiltinStrategies {
    pub fn new() -> Self {
        let mut registry = Self {
            compaction: HashMap::new(),
        };
        registry.register_compaction_strategy(CompactionStrategyClass::size_tiered());
        registry.register_compaction_strategy(CompactionStrategyClass::leveled());
        registry
    }

    /// Make an additional compaction strategy resolvable by its qualified name.
    pub fn register_compaction_strategy(&mut self, class: CompactionStrategyClass) {
        self.compaction
            .insert(class.qualified_name().to_string(), class);
    }

    fn qualify(name: &str) -> String {
        if name.contains('.') {
            name.to_string()
        } else {
            format!("{}{}", COMPACTION_PACKAGE, name)
        }
    }
}

impl Default for BuiltinStrategies {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyRegistry for BuiltinStrategies {
    fn compaction_strategy(&self, name: &str) -> DdlResult<CompactionStrategyClass> {
        let name = name.trim();
        if !RE_CLASS_NAME.is_match(name) {
            return Err(DdlError::configuration(format!(
                "Invalid compaction strategy class name '{}'",
                name
            )));
        }

        let qualified = Self::qualify(name);
        let class = self.compaction.get(&qualified).cloned().ok_or_else(|| {
            DdlError::configuration(format!(
                "Could not create Compaction Strategy of type {}",
                qualified
            ))
        })?;

        debug!("Resolved compaction strategy '{}' to {}", name, class);
        Ok(class)
    }

    fn compression_parameters(
        &self,
        options: &HashMap<String, String>,
    ) -> DdlResult<CompressionParameters> {
        Ok(CompressionParameters::create(options)?)
    }
}
