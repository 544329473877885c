//! Table option keywords.
//!
//! Holds the names accepted in a table statement's `WITH` clause, the retired
//! names that must be rejected, and the sub-option names used inside the
//! compound `compaction` and `compression` options.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::str::FromStr;

pub const KW_COMMENT: &str = "comment";
pub const KW_READREPAIRCHANCE: &str = "read_repair_chance";
pub const KW_DCLOCALREADREPAIRCHANCE: &str = "dclocal_read_repair_chance";
pub const KW_GCGRACESECONDS: &str = "gc_grace_seconds";
pub const KW_REPLICATEONWRITE: &str = "replicate_on_write";
pub const KW_CACHING: &str = "caching";
pub const KW_BF_FP_CHANCE: &str = "bloom_filter_fp_chance";
pub const KW_COMPACTION: &str = "compaction";
pub const KW_COMPRESSION: &str = "compression";
pub const KW_DEFAULT_R_CONSISTENCY: &str = "default_read_consistency";
pub const KW_DEFAULT_W_CONSISTENCY: &str = "default_write_consistency";

/// Compaction sub-option naming the strategy.
pub const COMPACTION_STRATEGY_CLASS_KEY: &str = "class";
/// Compaction sub-options carrying the thresholds.
pub const KW_MINCOMPACTIONTHRESHOLD: &str = "min_threshold";
pub const KW_MAXCOMPACTIONTHRESHOLD: &str = "max_threshold";

/// Option names that used to be accepted and now fail validation.
pub const OBSOLETE_OPTIONS: [&str; 6] = [
    "compaction_strategy_class",
    "compaction_strategy_options",
    "min_compaction_threshold",
    "max_compaction_threshold",
    "compaction_parameters",
    "compression_parameters",
];

/// Options recognized in a table statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableOption {
    Comment,
    ReadRepairChance,
    DcLocalReadRepairChance,
    GcGraceSeconds,
    ReplicateOnWrite,
    Caching,
    BloomFilterFpChance,
    Compaction,
    Compression,
    DefaultReadConsistency,
    DefaultWriteConsistency,
}

impl TableOption {
    pub const ALL: [TableOption; 11] = [
        TableOption::Comment,
        TableOption::ReadRepairChance,
        TableOption::DcLocalReadRepairChance,
        TableOption::GcGraceSeconds,
        TableOption::ReplicateOnWrite,
        TableOption::Caching,
        TableOption::BloomFilterFpChance,
        TableOption::Compaction,
        TableOption::Compression,
        TableOption::DefaultReadConsistency,
        TableOption::DefaultWriteConsistency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableOption::Comment => KW_COMMENT,
            TableOption::ReadRepairChance => KW_READREPAIRCHANCE,
            TableOption::DcLocalReadRepairChance => KW_DCLOCALREADREPAIRCHANCE,
            TableOption::GcGraceSeconds => KW_GCGRACESECONDS,
            TableOption::ReplicateOnWrite => KW_REPLICATEONWRITE,
            TableOption::Caching => KW_CACHING,
            TableOption::BloomFilterFpChance => KW_BF_FP_CHANCE,
            TableOption::Compaction => KW_COMPACTION,
            TableOption::Compression => KW_COMPRESSION,
            TableOption::DefaultReadConsistency => KW_DEFAULT_R_CONSISTENCY,
            TableOption::DefaultWriteConsistency => KW_DEFAULT_W_CONSISTENCY,
        }
    }
}

/// Option names are case-sensitive.
impl FromStr for TableOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableOption::ALL
            .iter()
            .copied()
            .find(|option| option.as_str() == s)
            .ok_or(())
    }
}

static RECOGNIZED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TableOption::ALL.iter().map(|option| option.as_str()).collect());

static OBSOLETE: Lazy<HashSet<&'static str>> = Lazy::new(|| OBSOLETE_OPTIONS.into_iter().collect());

/// Names currently accepted in a table statement.
pub fn recognized() -> &'static HashSet<&'static str> {
    &RECOGNIZED
}

/// Retired names.
pub fn obsolete() -> &'static HashSet<&'static str> {
    &OBSOLETE
}

pub fn is_recognized(name: &str) -> bool {
    RECOGNIZED.contains(name)
}

pub fn is_obsolete(name: &str) -> bool {
    OBSOLETE.contains(name)
}
