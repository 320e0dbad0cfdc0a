//! Export sinks: where an export request from the editor ends up.

use super::{ExportFormat, ExportOptions, ExportResult, ExporterRegistry};
use crate::error::Result;
use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// URL prefix under which exported files are served.
pub const DOWNLOAD_PREFIX: &str = "/api/exports/download/";

/// Reply to an export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    /// Whether the export succeeded
    pub success: bool,

    /// Where the file can be downloaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// Name of the produced file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportResponse {
    /// Successful response for a file name.
    pub fn ok(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            success: true,
            download_url: Some(format!("{}{}", DOWNLOAD_PREFIX, filename)),
            filename: Some(filename),
            error: None,
        }
    }

    /// Failed response.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            download_url: None,
            filename: None,
            error: Some(error.into()),
        }
    }
}

/// Destination for export requests.
///
/// An `Err` is a transport failure; a response with `success: false` is a
/// failure reported by the sink itself. The editor treats both as errors.
pub trait ExportSink {
    /// Export a document in the given format.
    fn export(&self, doc: &Document, format: ExportFormat) -> Result<ExportResponse>;
}

/// Sink writing exports into a directory.
pub struct FileExportSink {
    dir: PathBuf,
    registry: ExporterRegistry,
    options: ExportOptions,
}

impl FileExportSink {
    /// Create a sink writing into `dir`, with every built-in exporter.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            registry: ExporterRegistry::with_defaults(),
            options: ExportOptions::default(),
        }
    }

    /// Use a custom exporter registry.
    pub fn with_registry(mut self, registry: ExporterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set export options.
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Directory exports are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of an exported file.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Write an export result, creating the directory if needed.
    pub fn write(&self, result: &ExportResult) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&result.filename);
        fs::write(&path, &result.content)?;
        Ok(path)
    }
}

impl ExportSink for FileExportSink {
    fn export(&self, doc: &Document, format: ExportFormat) -> Result<ExportResponse> {
        let result = self.registry.export(doc, format, &self.options)?;
        let path = self.write(&result)?;
        log::info!("Exported {} to {}", format, path.display());
        Ok(ExportResponse::ok(result.filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Page, TemplateStyles};

    #[test]
    fn test_response_wire_shape() {
        let ok = serde_json::to_value(ExportResponse::ok("a.html")).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["downloadUrl"], "/api/exports/download/a.html");
        assert_eq!(ok["filename"], "a.html");
        assert!(ok.get("error").is_none());

        let failed: ExportResponse =
            serde_json::from_str(r#"{"success":false,"error":"disk full"}"#).unwrap();
        assert_eq!(failed, ExportResponse::failure("disk full"));
    }

    #[test]
    fn test_file_sink_writes_export() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileExportSink::new(dir.path().join("exports"));

        let mut doc = Document::new("kindle-standard", TemplateStyles::default()).with_title("Notes");
        doc.add_page(Page::with_elements(vec![Element::paragraph("hi")]));

        let response = sink.export(&doc, ExportFormat::Epub).unwrap();
        assert!(response.success);
        assert_eq!(response.filename.as_deref(), Some("Notes_epub.html"));

        let written = fs::read_to_string(sink.path_for("Notes_epub.html")).unwrap();
        assert!(written.contains("<p>hi</p>"));
    }

    #[test]
    fn test_file_sink_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileExportSink::new(dir.path()).with_registry(ExporterRegistry::new());
        let doc = Document::new("kindle-standard", TemplateStyles::default());
        assert!(sink.export(&doc, ExportFormat::Html).is_err());
    }
}
