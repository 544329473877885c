use super::types::CompactionConfig;
use crate::ddl::{DdlError, DdlResult, PropertyDefinitions};
use crate::keywords::{COMPACTION_STRATEGY_CLASS_KEY, KW_COMPACTION};
use crate::strategies::StrategyRegistry;
use std::collections::HashMap;

pub(super) fn raw_options(properties: &PropertyDefinitions) -> DdlResult<HashMap<String, String>> {
    Ok(properties.get_map(KW_COMPACTION)?.cloned().unwrap_or_default())
}

/// A non-empty `compaction` map must name its strategy in `class`.
pub(super) fn resolve(
    properties: &PropertyDefinitions,
    registry: &dyn StrategyRegistry,
) -> DdlResult<CompactionConfig> {
    let mut options = raw_options(properties)?;
    if options.is_empty() {
        return Ok(CompactionConfig::default());
    }

    let strategy = options.remove(COMPACTION_STRATEGY_CLASS_KEY).ok_or_else(|| {
        DdlError::configuration(format!(
            "Missing sub-option '{}' for the '{}' option.",
            COMPACTION_STRATEGY_CLASS_KEY, KW_COMPACTION
        ))
    })?;

    Ok(CompactionConfig {
        strategy: Some(registry.compaction_strategy(&strategy)?),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::BuiltinStrategies;
    use tessera_commons::CompactionStrategyClass;

    fn with_compaction(pairs: &[(&str, &str)]) -> PropertyDefinitions {
        let mut props = PropertyDefinitions::new();
        props
            .add_map_property(
                KW_COMPACTION,
                pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            )
            .unwrap();
        props
    }

    #[test]
    fn test_no_compaction_option() {
        let config = resolve(&PropertyDefinitions::new(), &BuiltinStrategies::new()).unwrap();
        assert_eq!(config, CompactionConfig::default());
    }

    #[test]
    fn test_empty_compaction_map_needs_no_class() {
        let config = resolve(&with_compaction(&[]), &BuiltinStrategies::new()).unwrap();
        assert!(config.strategy.is_none());
    }

    #[test]
    fn test_class_is_resolved_and_stripped() {
        let props = with_compaction(&[("class", "LeveledCompactionStrategy"), ("sstable_size_in_mb", "10")]);
        let config = resolve(&props, &BuiltinStrategies::new()).unwrap();

        assert_eq!(config.strategy, Some(CompactionStrategyClass::leveled()));
        assert_eq!(config.options.len(), 1);
        assert_eq!(config.options.get("sstable_size_in_mb").map(String::as_str), Some("10"));
        // the raw bag is untouched
        assert!(raw_options(&props).unwrap().contains_key("class"));
    }

    #[test]
    fn test_missing_class() {
        let err = resolve(&with_compaction(&[("min_threshold", "2")]), &BuiltinStrategies::new())
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.message(), "Missing sub-option 'class' for the 'compaction' option.");
    }
}
