use crate::ddl::{DdlError, DdlResult, PropertyDefinitions};
use tessera_commons::ConsistencyLevel;

/// Parse an optional consistency override. Applicability to the keyspace is
/// checked by the caller.
pub(super) fn level(properties: &PropertyDefinitions, key: &str) -> DdlResult<Option<ConsistencyLevel>> {
    let Some(value) = properties.get_simple(key)? else {
        return Ok(None);
    };

    value
        .parse::<ConsistencyLevel>()
        .map(Some)
        .map_err(|_| DdlError::configuration(format!("Invalid consistency level value: {}", value)))
}
