use crate::ddl::{DdlResult, PropertyDefinitions};
use crate::keywords::KW_COMPRESSION;
use std::collections::HashMap;
use tessera_commons::models::compression::SSTABLE_COMPRESSION;

/// The `compression` sub-options, or the configured default compressor when
/// the statement gives none. Empty when neither exists.
pub(super) fn options(
    properties: &PropertyDefinitions,
    default_compressor: Option<&str>,
) -> DdlResult<HashMap<String, String>> {
    match properties.get_map(KW_COMPRESSION)? {
        Some(map) if !map.is_empty() => Ok(map.clone()),
        _ => Ok(default_compressor
            .map(|name| HashMap::from([(SSTABLE_COMPRESSION.to_string(), name.to_string())]))
            .unwrap_or_default()),
    }
}
