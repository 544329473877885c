use super::types::ValidatedTableProperties;
use crate::ddl::{DdlResult, PropertyDefinitions};
use crate::keyspaces::ConsistencyValidator;
use crate::keywords::{
    KW_BF_FP_CHANCE, KW_CACHING, KW_COMMENT, KW_DCLOCALREADREPAIRCHANCE,
    KW_DEFAULT_R_CONSISTENCY, KW_DEFAULT_W_CONSISTENCY, KW_GCGRACESECONDS,
    KW_MAXCOMPACTIONTHRESHOLD, KW_MINCOMPACTIONTHRESHOLD, KW_READREPAIRCHANCE,
    KW_REPLICATEONWRITE,
};
use crate::strategies::StrategyRegistry;
use log::debug;
use tessera_commons::{Caching, TableMetadata};

/// First value present in `sources`, parsed as an integer for property
/// `name`; `current` when every source is empty.
pub(crate) fn resolve_with_fallback(
    name: &str,
    sources: &[Option<&str>],
    current: i32,
) -> DdlResult<i32> {
    let value = sources.iter().find_map(|source| *source);
    PropertyDefinitions::to_int(name, value, current)
}

impl ValidatedTableProperties {
    /// Write every property onto `cfm`, in a fixed order.
    ///
    /// Properties absent from the statement keep their current value. The
    /// first failing step aborts; steps before it have already been applied.
    pub fn apply_to_metadata(
        &self,
        cfm: &mut TableMetadata,
        registry: &dyn StrategyRegistry,
        validator: &dyn ConsistencyValidator,
    ) -> DdlResult<()> {
        let props = &self.properties;
        debug!("Applying {} to {}.{}", self, cfm.keyspace(), cfm.name());

        if props.has_property(KW_COMMENT) {
            cfm.set_comment(props.get_string(KW_COMMENT, "")?);
        }

        cfm.set_read_repair_chance(props.get_double(KW_READREPAIRCHANCE, cfm.read_repair_chance())?);
        cfm.set_dclocal_read_repair_chance(
            props.get_double(KW_DCLOCALREADREPAIRCHANCE, cfm.dclocal_read_repair_chance())?,
        );
        cfm.set_gc_grace_seconds(props.get_int(KW_GCGRACESECONDS, cfm.gc_grace_seconds())?);
        cfm.set_replicate_on_write(props.get_boolean(KW_REPLICATEONWRITE, cfm.replicate_on_write())?);

        let compaction_options = self.compaction_options();
        let min_threshold = resolve_with_fallback(
            KW_MINCOMPACTIONTHRESHOLD,
            &[compaction_options.get(KW_MINCOMPACTIONTHRESHOLD).map(String::as_str)],
            cfm.min_compaction_threshold(),
        )?;
        let max_threshold = resolve_with_fallback(
            KW_MAXCOMPACTIONTHRESHOLD,
            &[compaction_options.get(KW_MAXCOMPACTIONTHRESHOLD).map(String::as_str)],
            cfm.max_compaction_threshold(),
        )?;
        cfm.set_min_compaction_threshold(min_threshold);
        cfm.set_max_compaction_threshold(max_threshold);

        let caching = props.get_string(KW_CACHING, cfm.caching().as_str())?;
        cfm.set_caching(Caching::from_string(&caching)?);

        cfm.set_bloom_filter_fp_chance(props.get_double(KW_BF_FP_CHANCE, cfm.bloom_filter_fp_chance())?);

        if let Some(strategy) = self.compaction_strategy() {
            cfm.set_compaction_strategy_class(strategy.clone());
            cfm.set_compaction_strategy_options(compaction_options.clone());
        }

        let compression_options = self.compression_options()?;
        if !compression_options.is_empty() {
            cfm.set_compression_parameters(registry.compression_parameters(&compression_options)?);
        }

        if let Some(level) = self.consistency_level(KW_DEFAULT_R_CONSISTENCY)? {
            validator.validate_for_read(cfm.keyspace(), level)?;
            cfm.set_default_read_cl(level);
        }
        if let Some(level) = self.consistency_level(KW_DEFAULT_W_CONSISTENCY)? {
            validator.validate_for_write(cfm.keyspace(), level)?;
            cfm.set_default_write_cl(level);
        }

        debug!("Applied table properties to {}.{}", cfm.keyspace(), cfm.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddl::TableProperties;
    use crate::keyspaces::KeyspaceCatalog;
    use crate::strategies::BuiltinStrategies;
    use std::collections::HashMap;
    use tessera_commons::{
        CompactionStrategyClass, ConsistencyLevel, KeyspaceName, ReplicationStrategy, TableName,
    };
    use tessera_configs::SchemaSettings;

    fn metadata() -> TableMetadata {
        TableMetadata::new(KeyspaceName::new("app"), TableName::new("events"))
    }

    fn catalog() -> KeyspaceCatalog {
        KeyspaceCatalog::new().with_keyspace("app", ReplicationStrategy::simple(3))
    }

    fn apply_json(json: &str, cfm: &mut TableMetadata) -> DdlResult<()> {
        let registry = BuiltinStrategies::new();
        TableProperties::new(PropertyDefinitions::from_json(json)?, &SchemaSettings::without_default_compressor())
            .validate(&registry)?
            .apply_to_metadata(cfm, &registry, &catalog())
    }

    #[test]
    fn test_resolve_with_fallback() {
        assert_eq!(resolve_with_fallback("min_threshold", &[Some("2")], 4).unwrap(), 2);
        assert_eq!(resolve_with_fallback("min_threshold", &[None, Some("8")], 4).unwrap(), 8);
        assert_eq!(resolve_with_fallback("min_threshold", &[None], 4).unwrap(), 4);
        assert_eq!(resolve_with_fallback("min_threshold", &[], 4).unwrap(), 4);

        let err = resolve_with_fallback("max_threshold", &[Some("many")], 32).unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_scalar_properties() {
        let mut cfm = metadata();
        apply_json(
            r#"{"comment": "click stream", "read_repair_chance": "0.5",
                "dclocal_read_repair_chance": "0.25", "replicate_on_write": "no",
                "caching": "rows_only", "bloom_filter_fp_chance": "0.1"}"#,
            &mut cfm,
        )
        .unwrap();

        assert_eq!(cfm.comment(), "click stream");
        assert_eq!(cfm.read_repair_chance(), 0.5);
        assert_eq!(cfm.dclocal_read_repair_chance(), 0.25);
        assert!(!cfm.replicate_on_write());
        assert_eq!(cfm.caching(), Caching::RowsOnly);
        assert_eq!(cfm.bloom_filter_fp_chance(), 0.1);
        assert_eq!(cfm.gc_grace_seconds(), 864_000);
    }

    #[test]
    fn test_absent_comment_is_left_alone() {
        let mut cfm = metadata();
        cfm.set_comment("existing");
        apply_json("{}", &mut cfm).unwrap();
        assert_eq!(cfm.comment(), "existing");
    }

    #[test]
    fn test_thresholds_only_from_compaction_map() {
        let mut cfm = metadata();
        cfm.set_max_compaction_threshold(64);
        apply_json(
            r#"{"compaction": {"class": "SizeTieredCompactionStrategy", "min_threshold": "6"}}"#,
            &mut cfm,
        )
        .unwrap();

        assert_eq!(cfm.min_compaction_threshold(), 6);
        assert_eq!(cfm.max_compaction_threshold(), 64);
        assert_eq!(cfm.compaction_strategy_class(), &CompactionStrategyClass::size_tiered());
        assert_eq!(
            cfm.compaction_strategy_options(),
            &HashMap::from([("min_threshold".to_string(), "6".to_string())])
        );
    }

    #[test]
    fn test_bad_caching_value() {
        let mut cfm = metadata();
        let err = apply_json(r#"{"caching": "everything"}"#, &mut cfm).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.message().contains("everything"));
    }

    #[test]
    fn test_bad_integer_is_syntax_error() {
        let mut cfm = metadata();
        let err = apply_json(r#"{"gc_grace_seconds": "soon"}"#, &mut cfm).unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.message(), "Invalid integer value soon for 'gc_grace_seconds'");
    }

    #[test]
    fn test_consistency_overrides() {
        let mut cfm = metadata();
        apply_json(
            r#"{"default_read_consistency": "QUORUM", "default_write_consistency": "ALL"}"#,
            &mut cfm,
        )
        .unwrap();
        assert_eq!(cfm.default_read_cl(), ConsistencyLevel::Quorum);
        assert_eq!(cfm.default_write_cl(), ConsistencyLevel::All);
    }

    #[test]
    fn test_any_rejected_for_reads() {
        let mut cfm = metadata();
        let err = apply_json(r#"{"default_read_consistency": "ANY"}"#, &mut cfm).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(cfm.default_read_cl(), ConsistencyLevel::One);
    }
}
