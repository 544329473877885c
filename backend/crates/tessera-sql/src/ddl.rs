//! Schema statement support shared by CREATE TABLE and ALTER TABLE.
//!
//! - `properties`: the raw `WITH` property bag and its typed getters
//! - `table_properties`: validation of that bag and application onto `TableMetadata`

pub mod properties;
pub mod table_properties;

pub use crate::error::{DdlError, DdlResult};
pub use properties::{PropertyDefinitions, PropertyValue};
pub use table_properties::{CompactionConfig, TableProperties, ValidatedTableProperties};
