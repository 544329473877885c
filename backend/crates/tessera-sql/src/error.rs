// Error types for schema statement processing
use tessera_commons::CommonError;
use thiserror::Error;

/// Errors raised while validating or applying a statement's properties
#[derive(Error, Debug)]
pub enum DdlError {
    /// Semantically invalid input: unknown or obsolete option, missing sub-option,
    /// unresolvable strategy/compressor, bad consistency level, ...
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<CommonError>,
    },

    /// A raw value does not have the shape or type its getter expects
    #[error("Syntax error: {0}")]
    Syntax(String),
}

impl DdlError {
    pub fn configuration(message: impl Into<String>) -> Self {
        DdlError::Configuration {
            message: message.into(),
            source: None,
        }
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        DdlError::Syntax(message.into())
    }

    /// The message without the error-kind prefix.
    pub fn message(&self) -> &str {
        match self {
            DdlError::Configuration { message, .. } => message,
            DdlError::Syntax(message) => message,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DdlError::Configuration { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, DdlError::Syntax(_))
    }
}

/// Collaborator failures surface as configuration errors, keeping the
/// original message and the original error as the source.
impl From<CommonError> for DdlError {
    fn from(err: CommonError) -> Self {
        DdlError::Configuration {
            message: err.message().to_string(),
            source: Some(err),
        }
    }
}

/// Result type used by the DDL property layer.
pub type DdlResult<T> = Result<T, DdlError>;
