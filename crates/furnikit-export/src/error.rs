//! Error types for the export crate.

use thiserror::Error;

/// Errors that can occur while exporting geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    /// The requested drawing format is not supported.
    #[error("Unsupported CAD format: {0}")]
    UnsupportedFormat(String),

    /// The face mode name is not recognised.
    #[error("Unknown DXF face mode: {0}")]
    UnknownFaceMode(String),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
