//! User-facing results of session operations that cross an I/O boundary.

use crate::export::{ExportFormat, ExportResponse};
use std::fmt;

/// Message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Informational message
    Info(String),
    /// Error message
    Error(String),
}

impl Notice {
    /// Check if this notice reports an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    /// Message text.
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(m) | Notice::Error(m) => m,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of an export request from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// There was no document to export
    NoDocument,

    /// The file is ready for download
    Download {
        /// Exported format
        format: ExportFormat,
        /// Download URL
        download_url: String,
        /// File name
        filename: String,
    },

    /// The sink failed
    Failed(String),
}

impl ExportOutcome {
    /// Map a sink response.
    pub fn from_response(format: ExportFormat, response: ExportResponse) -> Self {
        match response {
            ExportResponse {
                success: true,
                download_url: Some(download_url),
                filename: Some(filename),
                ..
            } => ExportOutcome::Download {
                format,
                download_url,
                filename,
            },
            ExportResponse {
                success: true, ..
            } => ExportOutcome::Failed("export response is missing the download link".into()),
            ExportResponse { error, .. } => {
                ExportOutcome::Failed(error.unwrap_or_else(|| "unknown error".into()))
            }
        }
    }

    /// Check if the export produced a file.
    pub fn is_download(&self) -> bool {
        matches!(self, ExportOutcome::Download { .. })
    }

    /// The message to show for this outcome.
    pub fn notice(&self) -> Notice {
        match self {
            ExportOutcome::NoDocument => Notice::Error("No document to export".into()),
            ExportOutcome::Download { format, .. } => Notice::Info(format!(
                "Document exported as {} successfully!",
                format.as_str().to_uppercase()
            )),
            ExportOutcome::Failed(error) => Notice::Error(format!("Export failed: {}", error)),
        }
    }
}
