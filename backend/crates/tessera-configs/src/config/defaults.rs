// Default value functions

pub fn default_compressor() -> Option<String> {
    Some("SnappyCompressor".to_string())
}

pub fn default_log_level() -> String {
    "info".to_string()
}
