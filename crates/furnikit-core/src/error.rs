//! Error handling for Furnikit
//!
//! Provides the error type shared by the core value types and the crates
//! layered on top of them:
//! - Dimension string parsing (legacy cut-list format)
//! - Archetype and format tag parsing
//! - Configuration loading and persistence
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Furnikit core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A cut-list dimension string does not follow the `WxHxT` pattern
    #[error("Invalid dimension string '{input}': {reason}")]
    InvalidDimensionString {
        /// The offending input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Furniture type tag outside the supported archetypes
    #[error("Unsupported furniture type: {0}")]
    UnsupportedArchetype(String),

    /// Export or file format tag that is not recognized
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Configuration is invalid or could not be processed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is an unsupported archetype error
    pub fn is_unsupported_archetype(&self) -> bool {
        matches!(self, Error::UnsupportedArchetype(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensionString {
            input: "800x400".to_string(),
            reason: "expected three components".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimension string '800x400': expected three components"
        );

        let err = Error::UnsupportedArchetype("bookcase".to_string());
        assert_eq!(err.to_string(), "Unsupported furniture type: bookcase");

        let err = Error::config("timeout must be > 0");
        assert_eq!(err.to_string(), "Configuration error: timeout must be > 0");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_is_unsupported_archetype() {
        assert!(Error::UnsupportedArchetype("x".into()).is_unsupported_archetype());
        assert!(!Error::other("x").is_unsupported_archetype());
    }
}
