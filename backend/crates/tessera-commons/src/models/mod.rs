//! Domain models shared across Tessera crates.

pub mod caching;
pub mod compaction;
pub mod compression;
pub mod consistency_level;
pub mod ids;
pub mod replication;
pub mod schemas;
pub mod table_name;

pub use caching::Caching;
pub use compaction::CompactionStrategyClass;
pub use compression::{CompressionParameters, Compressor};
pub use consistency_level::ConsistencyLevel;
pub use ids::KeyspaceName;
pub use replication::ReplicationStrategy;
pub use table_name::TableName;
