//! Table properties: validate a statement's `WITH` options, then apply them.
//!
//! Processing is two-phase. `TableProperties::validate` checks option names
//! and resolves the compaction strategy, producing a `ValidatedTableProperties`.
//! Only that value can be applied to a `TableMetadata`, so a strategy is
//! always resolved before anything is written.

mod apply;
mod compaction;
mod compression;
mod consistency;
mod types;
mod validate;

pub use types::{CompactionConfig, TableProperties, ValidatedTableProperties};
