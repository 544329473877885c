//! Loading server configuration from TOML files on disk

use std::io::Write;
use tempfile::NamedTempFile;
use tessera_configs::ServerConfig;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_schema_and_logging_sections() {
    let file = write_config(
        r#"
[schema]
default_compressor = "LZ4Compressor"

[logging]
level = "debug"
"#,
    );

    let config = ServerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.schema.default_compressor(), Some("LZ4Compressor"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_rejects_unknown_log_level() {
    let file = write_config("[logging]\nlevel = \"loud\"\n");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid log level 'loud'"), "{}", err);
}

#[test]
fn test_load_rejects_unknown_compressor() {
    let file = write_config("[schema]\ndefault_compressor = \"BrotliCompressor\"\n");
    assert!(ServerConfig::from_file(file.path()).is_err());
}

#[test]
fn test_load_missing_file() {
    let err = ServerConfig::from_file("/nonexistent/tessera.toml").unwrap_err();
    assert!(err.to_string().starts_with("Failed to read config file"));
}

#[test]
fn test_load_malformed_toml() {
    let file = write_config("[schema\ndefault_compressor = 1");
    let err = ServerConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config file"));
}
