//! Keyspace replication strategies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a keyspace places replicas across the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ReplicationStrategy {
    /// Replicas placed on consecutive nodes of the ring, no datacenter awareness.
    Simple { replication_factor: u32 },
    /// Per-datacenter replication factors.
    NetworkTopology { datacenters: BTreeMap<String, u32> },
}

impl ReplicationStrategy {
    pub fn simple(replication_factor: u32) -> Self {
        ReplicationStrategy::Simple { replication_factor }
    }

    pub fn network_topology<I, S>(datacenters: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        ReplicationStrategy::NetworkTopology {
            datacenters: datacenters.into_iter().map(|(dc, rf)| (dc.into(), rf)).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReplicationStrategy::Simple { .. } => "SimpleStrategy",
            ReplicationStrategy::NetworkTopology { .. } => "NetworkTopologyStrategy",
        }
    }

    pub fn is_datacenter_aware(&self) -> bool {
        matches!(self, ReplicationStrategy::NetworkTopology { .. })
    }
}
