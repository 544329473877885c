//! SSTable compression parameters.

use crate::errors::{CommonError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Sub-option naming the compressor.
pub const SSTABLE_COMPRESSION: &str = "sstable_compression";
pub const CHUNK_LENGTH_KB: &str = "chunk_length_kb";
pub const CRC_CHECK_CHANCE: &str = "crc_check_chance";

/// Package prefix accepted in front of compressor names.
pub const COMPRESSOR_PACKAGE: &str = "tessera.io.compress.";

pub const DEFAULT_CHUNK_LENGTH_KB: u32 = 64;
pub const DEFAULT_CRC_CHECK_CHANCE: f64 = 1.0;

/// Block compressors available for on-disk segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compressor {
    #[serde(rename = "LZ4Compressor")]
    Lz4,
    #[serde(rename = "SnappyCompressor")]
    Snappy,
    #[serde(rename = "DeflateCompressor")]
    Deflate,
}

impl Compressor {
    pub const VALUES: [Compressor; 3] = [Compressor::Lz4, Compressor::Snappy, Compressor::Deflate];

    pub fn class_name(self) -> &'static str {
        match self {
            Compressor::Lz4 => "LZ4Compressor",
            Compressor::Snappy => "SnappyCompressor",
            Compressor::Deflate => "DeflateCompressor",
        }
    }

    /// Looks a compressor up by short or package-qualified class name.
    pub fn from_class_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix(COMPRESSOR_PACKAGE).unwrap_or(name);
        Compressor::VALUES.iter().copied().find(|c| c.class_name() == short)
    }
}

impl fmt::Display for Compressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Which compressor and block size a table's data segments use.
///
/// `compressor == None` means segments are written uncompressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionParameters {
    pub compressor: Option<Compressor>,
    pub chunk_length_kb: u32,
    pub crc_check_chance: f64,
}

impl CompressionParameters {
    pub fn new(compressor: Option<Compressor>) -> Self {
        Self {
            compressor,
            chunk_length_kb: DEFAULT_CHUNK_LENGTH_KB,
            crc_check_chance: DEFAULT_CRC_CHECK_CHANCE,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Builds parameters from the `compression` sub-options of a schema statement.
    ///
    /// An empty `sstable_compression` disables compression; in that case no
    /// other sub-option may be given.
    pub fn create(options: &HashMap<String, String>) -> Result<Self> {
        let unknown: BTreeSet<&str> = options
            .keys()
            .map(String::as_str)
            .filter(|k| !matches!(*k, SSTABLE_COMPRESSION | CHUNK_LENGTH_KB | CRC_CHECK_CHANCE))
            .collect();
        if !unknown.is_empty() {
            return Err(CommonError::configuration_error(format!(
                "Unknown compression options ({})",
                unknown.into_iter().collect::<Vec<_>>().join(", ")
            )));
        }

        let compressor = match options.get(SSTABLE_COMPRESSION).map(|s| s.trim()) {
            None | Some("") => None,
            Some(name) => Some(Compressor::from_class_name(name).ok_or_else(|| {
                CommonError::configuration_error(format!(
                    "Could not create Compression for type {}",
                    name
                ))
            })?),
        };

        if compressor.is_none() && options.len() > usize::from(options.contains_key(SSTABLE_COMPRESSION)) {
            return Err(CommonError::configuration_error(format!(
                "Compression sub-options require '{}' to name a compressor",
                SSTABLE_COMPRESSION
            )));
        }

        let mut params = Self::new(compressor);

        if let Some(raw) = options.get(CHUNK_LENGTH_KB) {
            let chunk: u32 = raw.trim().parse().map_err(|_| {
                CommonError::configuration_error(format!(
                    "Invalid value '{}' for {}",
                    raw, CHUNK_LENGTH_KB
                ))
            })?;
            if chunk == 0 || !chunk.is_power_of_two() {
                return Err(CommonError::configuration_error(format!(
                    "{} must be a power of 2",
                    CHUNK_LENGTH_KB
                )));
            }
            params.chunk_length_kb = chunk;
        }

        if let Some(raw) = options.get(CRC_CHECK_CHANCE) {
            let chance: f64 = raw.trim().parse().map_err(|_| {
                CommonError::configuration_error(format!(
                    "Invalid value '{}' for {}",
                    raw, CRC_CHECK_CHANCE
                ))
            })?;
            if !(0.0..=1.0).contains(&chance) {
                return Err(CommonError::configuration_error(format!(
                    "{} should be between 0.0 and 1.0",
                    CRC_CHECK_CHANCE
                )));
            }
            params.crc_check_chance = chance;
        }

        Ok(params)
    }

}

impl Default for CompressionParameters {
    fn default() -> Self {
        Self::new(Some(Compressor::Snappy))
    }
}
