use super::defaults::*;
use serde::{Deserialize, Serialize};

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub schema: SchemaSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Defaults applied to schema statements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSettings {
    /// Compressor used for tables created without a `compression` option.
    /// An empty string (or `None`) means such tables are stored uncompressed.
    /// Example: default_compressor = "LZ4Compressor"
    #[serde(default = "default_compressor")]
    pub default_compressor: Option<String>,
}

impl SchemaSettings {
    /// Settings with no default compressor configured.
    pub fn without_default_compressor() -> Self {
        Self {
            default_compressor: None,
        }
    }

    pub fn with_default_compressor(name: impl Into<String>) -> Self {
        Self {
            default_compressor: Some(name.into()),
        }
    }

    /// The configured default compressor, treating an empty name as unset.
    pub fn default_compressor(&self) -> Option<&str> {
        self.default_compressor
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            default_compressor: default_compressor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter for the `log` facade: error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
