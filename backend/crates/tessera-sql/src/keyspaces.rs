//! Consistency level applicability per keyspace.
//!
//! Whether a consistency level can be served depends on the owning keyspace's
//! replication strategy: datacenter-aware levels need per-datacenter replica
//! counts, and some levels only make sense on one of the read or write paths.

use std::collections::HashMap;
use tessera_commons::errors::{CommonError, Result};
use tessera_commons::{ConsistencyLevel, KeyspaceName, ReplicationStrategy};

/// Checks whether a consistency level can be used on the read or write path
/// of a keyspace. Failures are `CommonError::InvalidRequest`.
pub trait ConsistencyValidator {
    fn validate_for_read(&self, keyspace: &KeyspaceName, level: ConsistencyLevel) -> Result<()>;

    fn validate_for_write(&self, keyspace: &KeyspaceName, level: ConsistencyLevel) -> Result<()>;
}

/// Known keyspaces and their replication strategies.
#[derive(Debug, Clone, Default)]
pub struct KeyspaceCatalog {
    keyspaces: HashMap<KeyspaceName, ReplicationStrategy>,
}

impl KeyspaceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyspace(mut self, keyspace: impl Into<KeyspaceName>, strategy: ReplicationStrategy) -> Self {
        self.add_keyspace(keyspace, strategy);
        self
    }

    pub fn add_keyspace(&mut self, keyspace: impl Into<KeyspaceName>, strategy: ReplicationStrategy) {
        self.keyspaces.insert(keyspace.into(), strategy);
    }

    pub fn replication(&self, keyspace: &KeyspaceName) -> Result<&ReplicationStrategy> {
        self.keyspaces.get(keyspace).ok_or_else(|| {
            CommonError::invalid_request(format!("Keyspace '{}' does not exist", keyspace))
        })
    }

    fn require_network_topology(&self, keyspace: &KeyspaceName, level: ConsistencyLevel) -> Result<()> {
        let strategy = self.replication(keyspace)?;
        if !strategy.is_datacenter_aware() {
            return Err(CommonError::invalid_request(format!(
                "consistency level {} not compatible with replication strategy ({})",
                level,
                strategy.name()
            )));
        }
        Ok(())
    }
}

impl ConsistencyValidator for KeyspaceCatalog {
    fn validate_for_read(&self, keyspace: &KeyspaceName, level: ConsistencyLevel) -> Result<()> {
        match level {
            ConsistencyLevel::Any | ConsistencyLevel::EachQuorum => Err(CommonError::invalid_request(
                format!("{} ConsistencyLevel is only supported for writes", level),
            )),
            ConsistencyLevel::LocalQuorum => self.require_network_topology(keyspace, level),
            _ => self.replication(keyspace).map(|_| ()),
        }
    }

    fn validate_for_write(&self, keyspace: &KeyspaceName, level: ConsistencyLevel) -> Result<()> {
        if level.is_datacenter_aware() {
            self.require_network_topology(keyspace, level)
        } else {
            self.replication(keyspace).map(|_| ())
        }
    }
}
