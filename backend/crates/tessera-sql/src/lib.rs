//! # tessera-sql
//!
//! Validation of the `WITH` options of CREATE TABLE / ALTER TABLE statements
//! and their application onto a table's metadata record.
//!
//! Statement handling goes through two phases:
//!
//! 1. `TableProperties::validate` checks option names against the known
//!    keywords and resolves the compaction strategy, producing a
//!    `ValidatedTableProperties`.
//! 2. `ValidatedTableProperties::apply_to_metadata` writes every option onto a
//!    `TableMetadata`, falling back to the current value for options the
//!    statement does not mention.
//!
//! # Example
//!
//! ```rust
//! use tessera_commons::{KeyspaceName, ReplicationStrategy, TableMetadata, TableName};
//! use tessera_configs::SchemaSettings;
//! use tessera_sql::{BuiltinStrategies, KeyspaceCatalog, PropertyDefinitions, TableProperties};
//!
//! # fn example() -> tessera_sql::DdlResult<()> {
//! let registry = BuiltinStrategies::new();
//! let keyspaces = KeyspaceCatalog::new().with_keyspace("app", ReplicationStrategy::simple(3));
//!
//! let props = PropertyDefinitions::from_json(r#"{"gc_grace_seconds": "3600"}"#)?;
//! let validated = TableProperties::new(props, &SchemaSettings::default()).validate(&registry)?;
//!
//! let mut cfm = TableMetadata::new(KeyspaceName::new("app"), TableName::new("events"));
//! validated.apply_to_metadata(&mut cfm, &registry, &keyspaces)?;
//! assert_eq!(cfm.gc_grace_seconds(), 3600);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod ddl;
pub mod error;
pub mod keyspaces;
pub mod keywords;
pub mod strategies;

pub use ddl::{
    CompactionConfig, PropertyDefinitions, PropertyValue, TableProperties, ValidatedTableProperties,
};
pub use error::{DdlError, DdlResult};
pub use keyspaces::{ConsistencyValidator, KeyspaceCatalog};
pub use keywords::TableOption;
pub use strategies::{BuiltinStrategies, StrategyRegistry};
