//! Shared error types for Tessera.
//!
//! `CommonError` is what the schema collaborators (enumeration parsing,
//! compression parameter construction, keyspace lookups) report. The DDL layer
//! wraps it into its own error type.
//!
//! ## Example Usage
//!
//! ```rust
//! use tessera_commons::errors::{CommonError, Result};
//!
//! fn check_chance(value: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&value) {
//!         return Err(CommonError::configuration_error("chance must be between 0 and 1"));
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Common error type for Tessera operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CommonError {
    /// A setting is semantically invalid
    ConfigurationError(String),

    /// A request cannot be honoured in the current cluster context,
    /// e.g. a consistency level the keyspace's replication cannot satisfy
    InvalidRequest(String),
}

impl CommonError {
    /// Creates a ConfigurationError with a message.
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Creates an InvalidRequest error with a message.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// The bare message, without the category prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            CommonError::ConfigurationError(msg) | CommonError::InvalidRequest(msg) => msg,
        }
    }
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommonError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CommonError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for CommonError {}

/// Result type alias using CommonError.
pub type Result<T> = std::result::Result<T, CommonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CommonError::invalid_request("ANY ConsistencyLevel is only supported for writes");
        assert!(matches!(err, CommonError::InvalidRequest(_)));
        assert_eq!(
            err.to_string(),
            "Invalid request: ANY ConsistencyLevel is only supported for writes"
        );

        let err = CommonError::configuration_error("bad chunk");
        assert_eq!(err.to_string(), "Configuration error: bad chunk");
    }

    #[test]
    fn test_message_strips_prefix() {
        let err = CommonError::invalid_request("Keyspace 'ks' does not exist");
        assert_eq!(err.message(), "Keyspace 'ks' does not exist");
    }
}
