//! # pagewright
//!
//! Page-based document editor core with HTML preview and multi-format export.
//!
//! Documents are ordered pages of typed elements (paragraphs, headings,
//! images, blockquotes) styled by a template preset. An [`Editor`] session
//! edits one document at a time and keeps a rendered canvas of the current
//! page plus a properties panel bound to the selected element. Previews and
//! exports project the whole document to HTML.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagewright::{load_file, render};
//!
//! fn main() -> pagewright::Result<()> {
//!     // Load a stored document
//!     let doc = load_file("documents/doc_3f9c2a1b7d04.json")?;
//!
//!     // Render the full preview
//!     let html = render::to_preview_html(&doc);
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Editor session**: pages, selection, properties panel, toolbar actions
//! - **Safe markup**: all user text, styles, and image sources are encoded
//! - **Export formats**: HTML, print HTML, EPUB/DOCX/Kindle-style HTML, SCORM, JSON
//! - **Parallel export**: Uses Rayon to render several formats at once
//! - **File store**: one pretty-printed JSON file per document

pub mod editor;
pub mod error;
pub mod export;
pub mod image;
pub mod model;
pub mod render;
pub mod store;
pub mod template;

// Re-export commonly used types
pub use editor::{Editor, EditorAction, EditorOptions, ExportOutcome, Notice, ViewMode};
pub use error::{Error, Result};
pub use export::{
    ExportFormat, ExportOptions, ExportResult, ExportSink, Exporter, ExporterRegistry,
    FileExportSink,
};
pub use image::ImageInput;
pub use model::{
    Document, Element, ElementBody, ElementId, ElementPatch, Metadata, Outline, Page, Styles,
    Template, TemplateStyles, TextAlign,
};
pub use render::{JsonFormat, PageSelection, PreviewOptions};
pub use store::{FileStore, SaveSink};
pub use template::{TemplateCatalog, TemplateSource, DEFAULT_TEMPLATE};

use std::fs;
use std::path::Path;

/// Load a stored document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use pagewright::load_file;
///
/// let doc = load_file("documents/doc_3f9c2a1b7d04.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = fs::read_to_string(path)?;
    Document::from_json(&json)
}

/// Load a document from its JSON form.
pub fn load_str(json: &str) -> Result<Document> {
    Document::from_json(json)
}

/// Render the full preview of a stored document.
///
/// # Example
///
/// ```no_run
/// use pagewright::preview_file;
///
/// let html = preview_file("documents/doc_3f9c2a1b7d04.json").unwrap();
/// std::fs::write("preview.html", html).unwrap();
/// ```
pub fn preview_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    Ok(render::to_preview_html(&doc))
}

/// Extract plain text from a stored document.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    Ok(doc.plain_text())
}

/// Export a stored document in one format with default options.
///
/// # Example
///
/// ```no_run
/// use pagewright::{export_file, ExportFormat};
///
/// let result = export_file("documents/doc_3f9c2a1b7d04.json", ExportFormat::Epub).unwrap();
/// std::fs::write(&result.filename, &result.content).unwrap();
/// ```
pub fn export_file<P: AsRef<Path>>(path: P, format: ExportFormat) -> Result<ExportResult> {
    let doc = load_file(path)?;
    ExporterRegistry::with_defaults().export(&doc, format, &ExportOptions::default())
}

/// Builder for loading and projecting documents.
///
/// # Example
///
/// ```no_run
/// use pagewright::{ExportFormat, Pagewright, PageSelection};
///
/// let result = Pagewright::new()
///     .with_pages(PageSelection::Range(1..=3))
///     .with_title("Sample chapters")
///     .without_toc()
///     .open("documents/doc_3f9c2a1b7d04.json")?
///     .export(ExportFormat::Html)?;
/// # Ok::<(), pagewright::Error>(())
/// ```
pub struct Pagewright {
    export_options: ExportOptions,
    registry: ExporterRegistry,
}

impl Pagewright {
    /// Create a new builder with every built-in exporter.
    pub fn new() -> Self {
        Self {
            export_options: ExportOptions::default(),
            registry: ExporterRegistry::with_defaults(),
        }
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.export_options.preview = self.export_options.preview.with_pages(pages);
        self
    }

    /// Override the document title in rendered output.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.export_options.preview = self.export_options.preview.with_title(title);
        self
    }

    /// Drop per-element inline styles from rendered output.
    pub fn without_element_styles(mut self) -> Self {
        self.export_options.preview = self.export_options.preview.with_element_styles(false);
        self
    }

    /// Leave out the cover block in HTML exports.
    pub fn without_cover(mut self) -> Self {
        self.export_options = self.export_options.with_cover(false);
        self
    }

    /// Leave out the table of contents in HTML exports.
    pub fn without_toc(mut self) -> Self {
        self.export_options = self.export_options.with_toc(false);
        self
    }

    /// Use a custom exporter registry.
    pub fn with_registry(mut self, registry: ExporterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Load a stored document.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<PagewrightResult> {
        let document = load_file(path)?;
        Ok(self.wrap(document))
    }

    /// Load a document from its JSON form.
    pub fn open_str(self, json: &str) -> Result<PagewrightResult> {
        let document = load_str(json)?;
        Ok(self.wrap(document))
    }

    fn wrap(self, document: Document) -> PagewrightResult {
        PagewrightResult {
            document,
            export_options: self.export_options,
            registry: self.registry,
        }
    }
}

impl Default for Pagewright {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded document with the options to project it.
pub struct PagewrightResult {
    /// The loaded document
    pub document: Document,
    export_options: ExportOptions,
    registry: ExporterRegistry,
}

impl PagewrightResult {
    /// Render the preview HTML.
    pub fn to_preview_html(&self) -> Result<String> {
        render::to_preview_html_with(&self.document, &self.export_options.preview)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document, &self.export_options.preview)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Export in one format.
    pub fn export(&self, format: ExportFormat) -> Result<ExportResult> {
        self.registry
            .export(&self.document, format, &self.export_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Open the document in an editor session.
    pub fn into_editor(self, options: EditorOptions) -> Editor {
        let mut editor = Editor::new(options);
        editor.load_document(self.document);
        editor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> String {
        let mut doc = Document::new(DEFAULT_TEMPLATE, TemplateStyles::default()).with_title("Book");
        doc.add_page(Page::with_elements(vec![
            Element::heading(1, "Intro"),
            Element::paragraph("Hello there."),
        ]));
        doc.add_page(Page::with_elements(vec![Element::paragraph("Page two.")]));
        serde_json::to_string(&doc).unwrap()
    }

    #[test]
    fn test_builder_options() {
        let builder = Pagewright::new()
            .with_title("T")
            .without_element_styles()
            .without_cover();

        assert_eq!(builder.export_options.preview.title.as_deref(), Some("T"));
        assert!(!builder.export_options.preview.include_element_styles);
        assert!(!builder.export_options.include_cover);
        assert!(builder.export_options.include_toc);
    }

    #[test]
    fn test_open_str_with_page_selection() {
        let result = Pagewright::new()
            .with_pages(PageSelection::Pages(vec![2]))
            .open_str(&sample_json())
            .unwrap();

        assert_eq!(result.to_text(), "Page two.");
        let html = result.export(ExportFormat::Html).unwrap();
        assert_eq!(html.filename, "Book.html");
        assert!(html.content.contains("Page two."));
        assert!(!html.content.contains("Hello there."));
    }

    #[test]
    fn test_into_editor() {
        let result = Pagewright::new().open_str(&sample_json()).unwrap();
        let editor = result.into_editor(EditorOptions::default());
        assert_eq!(editor.canvas().len(), 2);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_load_str_invalid_json() {
        assert!(load_str("{not json").is_err());
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file("/nonexistent/path/doc.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_export_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, sample_json()).unwrap();

        let result = export_file(&path, ExportFormat::Json).unwrap();
        let back = load_str(&result.content).unwrap();
        assert_eq!(back.title, "Book");
        assert_eq!(back.page_count(), 2);

        assert!(preview_file(&path).unwrap().contains("<h1"));
        assert!(extract_text(&path).unwrap().contains("Hello there."));
    }
}
