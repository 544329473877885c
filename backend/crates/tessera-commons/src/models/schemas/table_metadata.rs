//! Table metadata - the mutable configuration record of one table

use crate::errors::{CommonError, Result};
use crate::models::{
    Caching, CompactionStrategyClass, CompressionParameters, ConsistencyLevel, KeyspaceName,
    TableName,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_READ_REPAIR_CHANCE: f64 = 0.1;
pub const DEFAULT_DCLOCAL_READ_REPAIR_CHANCE: f64 = 0.0;
pub const DEFAULT_GC_GRACE_SECONDS: i32 = 864_000; // 10 days
pub const DEFAULT_REPLICATE_ON_WRITE: bool = true;
pub const DEFAULT_MIN_COMPACTION_THRESHOLD: i32 = 4;
pub const DEFAULT_MAX_COMPACTION_THRESHOLD: i32 = 32;
pub const DEFAULT_BLOOM_FILTER_FP_CHANCE: f64 = 0.01;

/// Configuration of a single table.
///
/// Schema statements read the current value of each property through the
/// getters and write new values through the `set_*` methods. Nothing here is
/// persisted; the schema store serializes the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    keyspace: KeyspaceName,
    name: TableName,
    comment: String,
    read_repair_chance: f64,
    dclocal_read_repair_chance: f64,
    gc_grace_seconds: i32,
    replicate_on_write: bool,
    min_compaction_threshold: i32,
    max_compaction_threshold: i32,
    caching: Caching,
    bloom_filter_fp_chance: f64,
    compaction_strategy_class: CompactionStrategyClass,
    compaction_strategy_options: HashMap<String, String>,
    compression_parameters: CompressionParameters,
    default_read_cl: ConsistencyLevel,
    default_write_cl: ConsistencyLevel,
}

impl TableMetadata {
    /// Creates metadata for a new table with every property at its default.
    pub fn new(keyspace: KeyspaceName, name: TableName) -> Self {
        Self {
            keyspace,
            name,
            comment: String::new(),
            read_repair_chance: DEFAULT_READ_REPAIR_CHANCE,
            dclocal_read_repair_chance: DEFAULT_DCLOCAL_READ_REPAIR_CHANCE,
            gc_grace_seconds: DEFAULT_GC_GRACE_SECONDS,
            replicate_on_write: DEFAULT_REPLICATE_ON_WRITE,
            min_compaction_threshold: DEFAULT_MIN_COMPACTION_THRESHOLD,
            max_compaction_threshold: DEFAULT_MAX_COMPACTION_THRESHOLD,
            caching: Caching::default(),
            bloom_filter_fp_chance: DEFAULT_BLOOM_FILTER_FP_CHANCE,
            compaction_strategy_class: CompactionStrategyClass::default(),
            compaction_strategy_options: HashMap::new(),
            compression_parameters: CompressionParameters::default(),
            default_read_cl: ConsistencyLevel::default(),
            default_write_cl: ConsistencyLevel::default(),
        }
    }

    pub fn keyspace(&self) -> &KeyspaceName {
        &self.keyspace
    }

    pub fn name(&self) -> &TableName {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = comment.into();
        self
    }

    pub fn read_repair_chance(&self) -> f64 {
        self.read_repair_chance
    }

    pub fn set_read_repair_chance(&mut self, chance: f64) -> &mut Self {
        self.read_repair_chance = chance;
        self
    }

    pub fn dclocal_read_repair_chance(&self) -> f64 {
        self.dclocal_read_repair_chance
    }

    pub fn set_dclocal_read_repair_chance(&mut self, chance: f64) -> &mut Self {
        self.dclocal_read_repair_chance = chance;
        self
    }

    pub fn gc_grace_seconds(&self) -> i32 {
        self.gc_grace_seconds
    }

    pub fn set_gc_grace_seconds(&mut self, seconds: i32) -> &mut Self {
        self.gc_grace_seconds = seconds;
        self
    }

    pub fn replicate_on_write(&self) -> bool {
        self.replicate_on_write
    }

    pub fn set_replicate_on_write(&mut self, replicate: bool) -> &mut Self {
        self.replicate_on_write = replicate;
        self
    }

    pub fn min_compaction_threshold(&self) -> i32 {
        self.min_compaction_threshold
    }

    pub fn set_min_compaction_threshold(&mut self, threshold: i32) -> &mut Self {
        self.min_compaction_threshold = threshold;
        self
    }

    pub fn max_compaction_threshold(&self) -> i32 {
        self.max_compaction_threshold
    }

    pub fn set_max_compaction_threshold(&mut self, threshold: i32) -> &mut Self {
        self.max_compaction_threshold = threshold;
        self
    }

    pub fn caching(&self) -> Caching {
        self.caching
    }

    pub fn set_caching(&mut self, caching: Caching) -> &mut Self {
        self.caching = caching;
        self
    }

    pub fn bloom_filter_fp_chance(&self) -> f64 {
        self.bloom_filter_fp_chance
    }

    pub fn set_bloom_filter_fp_chance(&mut self, chance: f64) -> &mut Self {
        self.bloom_filter_fp_chance = chance;
        self
    }

    pub fn compaction_strategy_class(&self) -> &CompactionStrategyClass {
        &self.compaction_strategy_class
    }

    pub fn set_compaction_strategy_class(&mut self, class: CompactionStrategyClass) -> &mut Self {
        self.compaction_strategy_class = class;
        self
    }

    pub fn compaction_strategy_options(&self) -> &HashMap<String, String> {
        &self.compaction_strategy_options
    }

    pub fn set_compaction_strategy_options(&mut self, options: HashMap<String, String>) -> &mut Self {
        self.compaction_strategy_options = options;
        self
    }

    pub fn compression_parameters(&self) -> &CompressionParameters {
        &self.compression_parameters
    }

    pub fn set_compression_parameters(&mut self, params: CompressionParameters) -> &mut Self {
        self.compression_parameters = params;
        self
    }

    pub fn default_read_cl(&self) -> ConsistencyLevel {
        self.default_read_cl
    }

    pub fn set_default_read_cl(&mut self, level: ConsistencyLevel) -> &mut Self {
        self.default_read_cl = level;
        self
    }

    pub fn default_write_cl(&self) -> ConsistencyLevel {
        self.default_write_cl
    }

    pub fn set_default_write_cl(&mut self, level: ConsistencyLevel) -> &mut Self {
        self.default_write_cl = level;
        self
    }

    /// Both thresholds at 0 turns minor compaction off.
    pub fn is_compaction_disabled(&self) -> bool {
        self.min_compaction_threshold == 0 && self.max_compaction_threshold == 0
    }

    /// Checks the cross-property invariants a schema change must keep.
    ///
    /// Run this after applying a statement's properties and before publishing
    /// the record.
    pub fn validate(&self) -> Result<()> {
        for (name, chance) in [
            ("read_repair_chance", self.read_repair_chance),
            ("dclocal_read_repair_chance", self.dclocal_read_repair_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(CommonError::configuration_error(format!(
                    "{} must be between 0.0 and 1.0",
                    name
                )));
            }
        }

        if self.gc_grace_seconds < 0 {
            return Err(CommonError::configuration_error(
                "gc_grace_seconds must be non-negative",
            ));
        }

        if !self.is_compaction_disabled() {
            if self.min_compaction_threshold < 2 {
                return Err(CommonError::configuration_error(
                    "min_compaction_threshold cannot be smaller than 2 (set both thresholds to 0 to disable compaction)",
                ));
            }
            if self.min_compaction_threshold > self.max_compaction_threshold {
                return Err(CommonError::configuration_error(format!(
                    "min_compaction_threshold ({}) cannot be greater than max_compaction_threshold ({})",
                    self.min_compaction_threshold, self.max_compaction_threshold
                )));
            }
        }

        if !(self.bloom_filter_fp_chance > 0.0 && self.bloom_filter_fp_chance <= 1.0) {
            return Err(CommonError::configuration_error(format!(
                "bloom_filter_fp_chance must be larger than 0 and at most 1.0, got {}",
                self.bloom_filter_fp_chance
            )));
        }

        Ok(())
    }
}
