//! Error types for the rules crate.
//!
//! This module provides structured error types for design generation and
//! for the optional remote model path.

use thiserror::Error;

/// Errors that can reach the caller of the generation pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Dimensions violate one or more archetype rules; carries all of them.
    #[error("Invalid dimensions: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    /// The furniture type tag is not one of the supported archetypes.
    #[error("Unsupported furniture type: {0}")]
    UnsupportedArchetype(String),

    /// The request document could not be read.
    #[error("Invalid design request: {0}")]
    InvalidRequest(String),
}

impl EngineError {
    /// Violated rules when this is a validation failure
    pub fn validation_errors(&self) -> &[String] {
        match self {
            EngineError::Validation { errors } => errors,
            _ => &[],
        }
    }
}

impl From<furnikit_core::Error> for EngineError {
    fn from(err: furnikit_core::Error) -> Self {
        match err {
            furnikit_core::Error::UnsupportedArchetype(tag) => EngineError::UnsupportedArchetype(tag),
            other => EngineError::InvalidRequest(other.to_string()),
        }
    }
}

/// Failures of the remote model path. Always recovered by the orchestrator.
#[derive(Error, Debug)]
pub enum RemoteGenerationError {
    /// Remote generation selected but no usable endpoint or key.
    #[error("Remote model not configured: {0}")]
    NotConfigured(String),

    /// The request could not be sent or the response not read.
    #[error("Remote model transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("Remote model returned status {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The response body was not a well-formed design.
    #[error("Remote model returned malformed data: {0}")]
    Malformed(String),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type alias for remote model calls.
pub type RemoteResult<T> = Result<T, RemoteGenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::Validation {
            errors: vec![
                "Desk width must be between 800mm and 2400mm".to_string(),
                "Desk depth must be between 500mm and 900mm".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: Desk width must be between 800mm and 2400mm; \
             Desk depth must be between 500mm and 900mm"
        );
        assert_eq!(err.validation_errors().len(), 2);

        let err = EngineError::UnsupportedArchetype("sofa".to_string());
        assert_eq!(err.to_string(), "Unsupported furniture type: sofa");
        assert!(err.validation_errors().is_empty());
    }

    #[test]
    fn test_from_core_error() {
        let err: EngineError = furnikit_core::Error::UnsupportedArchetype("bed".into()).into();
        assert_eq!(err, EngineError::UnsupportedArchetype("bed".to_string()));

        let err: EngineError = furnikit_core::Error::other("bad json").into();
        assert_eq!(err.to_string(), "Invalid design request: bad json");
    }

    #[test]
    fn test_remote_error_display() {
        let err = RemoteGenerationError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Remote model returned status 503: Service Unavailable"
        );

        let err = RemoteGenerationError::NotConfigured("missing api key".to_string());
        assert_eq!(err.to_string(), "Remote model not configured: missing api key");
    }
}
