//! Error types for the pagewright library.

use std::io;
use thiserror::Error;

/// Result type alias for pagewright operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, projecting, or exporting documents.
///
/// Editor-session operations never return these: a missing page or element is a
/// silent no-op there. Errors only come from the I/O boundaries (files, JSON,
/// exporters, the document store).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The supplied bytes are not a recognized image.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Error during rendering (preview, canvas, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Export failed.
    #[error("Export error: {0}")]
    Export(String),

    /// No exporter is registered for the requested format.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The requested document does not exist in the store.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Template catalog could not be loaded.
    #[error("Template error: {0}")]
    Template(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DocumentNotFound("doc_1".to_string());
        assert_eq!(err.to_string(), "Document not found: doc_1");

        let err = Error::UnsupportedFormat("mobi".to_string());
        assert_eq!(err.to_string(), "Unsupported export format: mobi");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
