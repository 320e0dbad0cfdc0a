//! JSON export: the document plus summary statistics.

use super::{ExportFormat, ExportOptions, Exporter};
use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{DocumentStats, PreviewOptions, PreviewRenderer};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    #[serde(flatten)]
    document: &'a Document,
    stats: JsonStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonStats {
    total_pages: usize,
    total_elements: usize,
    total_words: u32,
}

/// Exporter writing the stored document form with a `stats` block.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter;

impl JsonExporter {
    /// Create a new JSON exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, doc: &Document, _options: &ExportOptions) -> Result<(String, DocumentStats)> {
        // The whole document is exported regardless of page selection.
        let mut renderer = PreviewRenderer::new(PreviewOptions::new().with_stats(true));
        renderer.render_pages(doc);
        let stats = renderer.stats().clone();

        let export = JsonExport {
            document: doc,
            stats: JsonStats {
                total_pages: doc.page_count(),
                total_elements: doc.element_count(),
                total_words: stats.word_count,
            },
        };
        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| Error::Export(format!("JSON serialization error: {}", e)))?;
        Ok((json, stats))
    }
}
