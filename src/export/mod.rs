//! Document exporters with a plugin architecture.
//!
//! Every output format is an [`Exporter`]; the [`ExporterRegistry`] maps
//! formats to exporters and dispatches export requests. None of the formats
//! are binary: EPUB, DOCX, PDF, and SCORM exports are HTML shaped for the
//! respective downstream conversion tool.
//!
//! # Example
//!
//! ```
//! use pagewright::export::{ExportFormat, ExportOptions, ExporterRegistry};
//! use pagewright::model::{Document, Element, Page, TemplateStyles};
//!
//! fn main() -> pagewright::Result<()> {
//!     let mut doc = Document::new("kindle-standard", TemplateStyles::default())
//!         .with_title("My Book");
//!     doc.add_page(Page::with_elements(vec![Element::paragraph("Hello")]));
//!
//!     let registry = ExporterRegistry::with_defaults();
//!     let result = registry.export(&doc, ExportFormat::Html, &ExportOptions::default())?;
//!     assert_eq!(result.filename, "My_Book.html");
//!     Ok(())
//! }
//! ```

mod ebook;
mod html;
mod json;
mod scorm;
mod sink;

pub use ebook::{DocxExporter, EpubExporter, KindleExporter};
pub use html::{HtmlExporter, PrintExporter};
pub use json::JsonExporter;
pub use scorm::ScormExporter;
pub use sink::{ExportResponse, ExportSink, FileExportSink, DOWNLOAD_PREFIX};

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{DocumentStats, PreviewOptions, PreviewRenderer, PAGE_BREAK};
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Standalone web page
    Html,
    /// Print-ready HTML, to be saved as PDF from a browser
    Pdf,
    /// EPUB-style HTML, for conversion with an e-book tool
    Epub,
    /// DOCX-style HTML, for opening in a word processor
    Docx,
    /// Single-page course with completion tracking
    Scorm,
    /// Kindle-compatible XHTML
    Kindle,
    /// The document in its stored JSON form
    Json,
}

impl ExportFormat {
    /// All formats, in menu order.
    pub const ALL: [ExportFormat; 7] = [
        ExportFormat::Html,
        ExportFormat::Pdf,
        ExportFormat::Epub,
        ExportFormat::Docx,
        ExportFormat::Scorm,
        ExportFormat::Kindle,
        ExportFormat::Json,
    ];

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Epub => "epub",
            ExportFormat::Docx => "docx",
            ExportFormat::Scorm => "scorm",
            ExportFormat::Kindle => "kindle",
            ExportFormat::Json => "json",
        }
    }

    /// Suffix appended to the title stem to build the file name.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Html | ExportFormat::Kindle => ".html",
            ExportFormat::Pdf => "_print.html",
            ExportFormat::Epub => "_epub.html",
            ExportFormat::Docx => "_docx.html",
            ExportFormat::Scorm => "_scorm.html",
            ExportFormat::Json => ".json",
        }
    }

    /// MIME type of the produced file.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            _ => "text/html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Options for exporting a document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Options for the page projection
    pub preview: PreviewOptions,

    /// Emit a title block before the content
    pub include_cover: bool,

    /// Emit a table of contents built from the headings
    pub include_toc: bool,
}

impl ExportOptions {
    /// Create new export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set preview options.
    pub fn with_preview_options(mut self, options: PreviewOptions) -> Self {
        self.preview = options;
        self
    }

    /// Enable or disable the cover block.
    pub fn with_cover(mut self, include: bool) -> Self {
        self.include_cover = include;
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            preview: PreviewOptions::default(),
            include_cover: true,
            include_toc: true,
        }
    }
}

/// Result of exporting a document.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Format that was produced
    pub format: ExportFormat,

    /// Suggested file name
    pub filename: String,

    /// File content
    pub content: String,

    /// Projection statistics
    pub stats: DocumentStats,
}

impl ExportResult {
    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Trait for document exporters.
///
/// Implement this trait to add support for a new output format.
pub trait Exporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Get the name of this exporter.
    fn name(&self) -> &str {
        self.format().as_str()
    }

    /// File name for an exported document.
    fn file_name(&self, doc: &Document) -> String {
        format!("{}{}", safe_file_stem(&doc.title), self.format().file_suffix())
    }

    /// Render the file content.
    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<(String, DocumentStats)>;

    /// Render and name the export.
    fn export(&self, doc: &Document, options: &ExportOptions) -> Result<ExportResult> {
        let (content, stats) = self.render(doc, options)?;
        Ok(ExportResult {
            format: self.format(),
            filename: self.file_name(doc),
            content,
            stats,
        })
    }
}

/// Registry for document exporters.
pub struct ExporterRegistry {
    exporters: HashMap<ExportFormat, Arc<dyn Exporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
        }
    }

    /// Create a registry with an exporter for every format.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlExporter::new()));
        registry.register(Arc::new(PrintExporter::new()));
        registry.register(Arc::new(EpubExporter::new()));
        registry.register(Arc::new(DocxExporter::new()));
        registry.register(Arc::new(ScormExporter::new()));
        registry.register(Arc::new(KindleExporter::new()));
        registry.register(Arc::new(JsonExporter::new()));
        registry
    }

    /// Register an exporter, replacing any previous one for its format.
    pub fn register(&mut self, exporter: Arc<dyn Exporter>) {
        self.exporters.insert(exporter.format(), exporter);
    }

    /// Get the exporter for a format.
    pub fn get(&self, format: ExportFormat) -> Option<Arc<dyn Exporter>> {
        self.exporters.get(&format).cloned()
    }

    /// Check if a format is supported.
    pub fn supports(&self, format: ExportFormat) -> bool {
        self.exporters.contains_key(&format)
    }

    /// Supported formats, in menu order.
    pub fn formats(&self) -> Vec<ExportFormat> {
        ExportFormat::ALL
            .into_iter()
            .filter(|f| self.supports(*f))
            .collect()
    }

    /// Export a document in one format.
    pub fn export(
        &self,
        doc: &Document,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let exporter = self
            .get(format)
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;

        log::debug!("Exporting {} as {}", doc.id, format);
        exporter.export(doc, options)
    }

    /// Export a document in several formats in parallel.
    ///
    /// Results come back in the order of `formats`.
    pub fn export_all(
        &self,
        doc: &Document,
        formats: &[ExportFormat],
        options: &ExportOptions,
    ) -> Vec<(ExportFormat, Result<ExportResult>)> {
        formats
            .par_iter()
            .map(|format| (*format, self.export(doc, *format, options)))
            .collect()
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// File-name stem for a title: every non-alphanumeric character becomes `_`.
pub fn safe_file_stem(title: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let re = NON_ALNUM.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").expect("static pattern"));
    let stem = re.replace_all(title, "_").into_owned();
    if stem.is_empty() {
        "document".to_string()
    } else {
        stem
    }
}

/// Project the pages of a document with the export's preview options.
pub(crate) fn render_pages(doc: &Document, options: &ExportOptions) -> (String, DocumentStats) {
    let (pages, stats) = render_page_list(doc, options);
    (pages.join(PAGE_BREAK), stats)
}

/// Project each selected page separately.
pub(crate) fn render_page_list(
    doc: &Document,
    options: &ExportOptions,
) -> (Vec<String>, DocumentStats) {
    let mut preview = options.preview.clone();
    preview.collect_stats = true;
    let mut renderer = PreviewRenderer::new(preview);
    let pages = renderer.render_pages(doc);
    (pages, renderer.stats().clone())
}

/// Title to show in an export, honoring the preview override.
pub(crate) fn export_title<'a>(doc: &'a Document, options: &'a ExportOptions) -> &'a str {
    options.preview.title.as_deref().unwrap_or(&doc.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Page, TemplateStyles};

    fn sample_doc() -> Document {
        let mut doc =
            Document::new("kindle-standard", TemplateStyles::default()).with_title("My Book: Vol 1");
        doc.add_page(Page::with_elements(vec![
            Element::heading(1, "Intro"),
            Element::paragraph("Hello"),
        ]));
        doc
    }

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(safe_file_stem("My Book: Vol 1"), "My_Book__Vol_1");
        assert_eq!(safe_file_stem("Café"), "Caf_");
        assert_eq!(safe_file_stem(""), "document");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("kindle".parse::<ExportFormat>().unwrap(), ExportFormat::Kindle);
        assert!(matches!(
            "mobi".parse::<ExportFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExporterRegistry::with_defaults();
        assert_eq!(registry.formats(), ExportFormat::ALL.to_vec());
        assert!(ExporterRegistry::new().formats().is_empty());
    }

    #[test]
    fn test_file_names_per_format() {
        let doc = sample_doc();
        let registry = ExporterRegistry::with_defaults();
        let options = ExportOptions::default();
        let name = |format| registry.export(&doc, format, &options).unwrap().filename;

        assert_eq!(name(ExportFormat::Html), "My_Book__Vol_1.html");
        assert_eq!(name(ExportFormat::Pdf), "My_Book__Vol_1_print.html");
        assert_eq!(name(ExportFormat::Epub), "My_Book__Vol_1_epub.html");
        assert_eq!(name(ExportFormat::Docx), "My_Book__Vol_1_docx.html");
        assert_eq!(name(ExportFormat::Scorm), "My_Book__Vol_1_scorm.html");
        assert_eq!(name(ExportFormat::Json), "My_Book__Vol_1.json");
        assert_eq!(name(ExportFormat::Kindle), format!("kindle_{}.html", doc.id));
    }

    #[test]
    fn test_unregistered_format() {
        let registry = ExporterRegistry::new();
        let result = registry.export(&sample_doc(), ExportFormat::Html, &ExportOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_export_all_keeps_order() {
        let registry = ExporterRegistry::with_defaults();
        let results = registry.export_all(&sample_doc(), &ExportFormat::ALL, &ExportOptions::default());

        let formats: Vec<ExportFormat> = results.iter().map(|(f, _)| *f).collect();
        assert_eq!(formats, ExportFormat::ALL.to_vec());
        assert!(results.iter().all(|(_, r)| r.is_ok()));
    }
}
