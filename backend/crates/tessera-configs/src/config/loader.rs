use super::types::ServerConfig;
use std::fs;
use std::path::Path;
use tessera_commons::models::Compressor;

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text and finalize it.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let mut config: ServerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        config.finalize()?;

        Ok(config)
    }

    /// Normalize settings and validate configuration.
    pub fn finalize(&mut self) -> anyhow::Result<()> {
        // "" and absent both mean "no default compressor"
        self.schema.default_compressor = self.schema.default_compressor().map(str::to_string);

        self.validate()?;

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(name) = self.schema.default_compressor() {
            if Compressor::from_class_name(name).is_none() {
                let known: Vec<&str> = Compressor::VALUES.iter().map(|c| c.class_name()).collect();
                return Err(anyhow::anyhow!(
                    "Invalid default_compressor '{}'. Must be one of: {}",
                    name,
                    known.join(", ")
                ));
            }
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
