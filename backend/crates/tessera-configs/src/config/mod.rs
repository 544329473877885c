//! Server configuration: TOML-backed settings with serde defaults.

pub mod defaults;
mod loader;
mod types;

pub use types::{LoggingSettings, SchemaSettings, ServerConfig};
