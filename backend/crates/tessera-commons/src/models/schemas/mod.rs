//! Table schema records.

mod table_metadata;

pub use table_metadata::TableMetadata;
