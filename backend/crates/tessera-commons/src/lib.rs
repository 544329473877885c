//! # tessera-commons
//!
//! Shared types, enumerations and errors for Tessera's schema layer.
//!
//! This crate provides the foundational types used by `tessera-sql` and by
//! anything that stores table metadata:
//!
//! ## Type-Safe Wrappers
//!
//! - `KeyspaceName`: keyspace identifier wrapper
//! - `TableName`: table name wrapper
//!
//! ## Fixed Enumerations
//!
//! - `ConsistencyLevel`: how many replicas must acknowledge a read or write
//! - `Caching`: which caches a table participates in
//! - `ReplicationStrategy`: how a keyspace places its replicas
//!
//! ## Table Metadata
//!
//! `TableMetadata` is the mutable record describing a table's current
//! configuration. Schema statements validate their options and then write
//! them onto it through its setters.
//!
//! ## Example Usage
//!
//! ```rust
//! use tessera_commons::models::{KeyspaceName, TableName};
//! use tessera_commons::models::schemas::TableMetadata;
//!
//! let mut cfm = TableMetadata::new(KeyspaceName::new("app"), TableName::new("events"));
//! cfm.set_gc_grace_seconds(3600);
//! assert_eq!(cfm.gc_grace_seconds(), 3600);
//! ```

pub mod errors;
pub mod models;

pub use errors::{CommonError, Result};
pub use models::{
    Caching, CompactionStrategyClass, CompressionParameters, ConsistencyLevel, KeyspaceName,
    ReplicationStrategy, TableName,
};
pub use models::schemas::TableMetadata;
