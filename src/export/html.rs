//! Web and print HTML exporters, plus the page pieces other HTML exports share.

use super::{export_title, render_pages, ExportFormat, ExportOptions, Exporter};
use crate::error::Result;
use crate::model::Document;
use crate::render::markup::escape_html;
use crate::render::preview::{html_page_with_head, preview_css};
use crate::render::DocumentStats;

/// Deepest heading level listed in a table of contents.
const TOC_DEPTH: u8 = 2;

const WEB_CSS: &str = "\
        .content { max-width: 800px; margin: 0 auto; }
        .cover { text-align: center; margin-bottom: 50px; padding: 50px 0; border-bottom: 2px solid #eee; }
        .cover h1 { font-size: 2.5em; margin-bottom: 20px; }
        .toc { margin-bottom: 50px; }
        .toc ul { list-style: none; padding: 0; }
        .toc li { margin: 10px 0; padding: 10px; background: #f8f9fa; border-radius: 5px; }
        .toc .toc-page { float: right; color: #666; }
        blockquote { border-left: 4px solid #3498db; padding-left: 20px; margin: 20px 0; font-style: italic; }
";

const PRINT_CSS: &str = "\
        @media print {
            @page { margin: 2cm; }
            .page-break { page-break-before: always; }
        }
        .cover { text-align: center; margin-bottom: 50px; }
        .cover h1 { font-size: 2.5em; margin-bottom: 20px; }
        .toc ul { list-style: none; padding: 0; }
        .toc li { margin: 10px 0; padding: 10px; background: #f8f9fa; }
";

/// Exporter producing a standalone web page.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter;

impl HtmlExporter {
    /// Create a new HTML exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for HtmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<(String, DocumentStats)> {
        let (pages, stats) = render_pages(doc, options);
        let title = export_title(doc, options);

        let mut body = front_matter(doc, title, options, "toc");
        body.push_str("<div class=\"content\">\n");
        body.push_str(&pages);
        body.push_str("\n</div>");

        let css = format!("{}{}", preview_css(&doc.styles), WEB_CSS);
        Ok((
            html_page_with_head(
                title,
                "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
                &css,
                &body,
            ),
            stats,
        ))
    }
}

/// Exporter producing print-ready HTML, meant to be saved as PDF.
#[derive(Debug, Clone, Default)]
pub struct PrintExporter;

impl PrintExporter {
    /// Create a new print exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PrintExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<(String, DocumentStats)> {
        let (pages, stats) = render_pages(doc, options);
        let title = export_title(doc, options);

        let mut body = front_matter(doc, title, options, "toc page-break");
        body.push_str("<div class=\"content page-break\">\n");
        body.push_str(&pages);
        body.push_str("\n</div>");

        let css = format!("{}{}", preview_css(&doc.styles), PRINT_CSS);
        Ok((html_page_with_head(title, "", &css, &body), stats))
    }
}

/// Cover and table of contents, as enabled in the options.
pub(crate) fn front_matter(
    doc: &Document,
    title: &str,
    options: &ExportOptions,
    toc_class: &str,
) -> String {
    let mut html = String::new();
    if options.include_cover {
        html.push_str(&cover_html(doc, title));
    }
    if options.include_toc {
        html.push_str(&toc_html(doc, toc_class));
    }
    html
}

/// Title block with the creation date.
pub(crate) fn cover_html(doc: &Document, title: &str) -> String {
    format!(
        "<div class=\"cover\">\n<h1>{}</h1>\n<p><small>Created: {}</small></p>\n</div>\n",
        escape_html(title),
        doc.metadata.created_at.format("%Y-%m-%d")
    )
}

/// Table of contents from the document's top-level headings.
///
/// Empty when the document has no headings at or above the listed depth.
pub(crate) fn toc_html(doc: &Document, class: &str) -> String {
    let outline = doc.outline();
    let items: Vec<String> = outline
        .up_to_level(TOC_DEPTH)
        .map(|item| {
            format!(
                "<li>{} <span class=\"toc-page\">p. {}</span></li>",
                escape_html(&item.title),
                item.page
            )
        })
        .collect();

    if items.is_empty() {
        return String::new();
    }
    format!(
        "<div class=\"{}\">\n<h2>Contents</h2>\n<ul>\n{}\n</ul>\n</div>\n",
        class,
        items.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Page, TemplateStyles};
    use crate::render::PAGE_BREAK;

    fn sample_doc() -> Document {
        let mut doc = Document::new("kindle-standard", TemplateStyles::default())
            .with_title("<Guide>");
        doc.add_page(Page::with_elements(vec![
            Element::heading(1, "Start"),
            Element::paragraph("one"),
        ]));
        doc.add_page(Page::with_elements(vec![
            Element::heading(3, "Detail"),
            Element::heading(2, "Next"),
        ]));
        doc
    }

    #[test]
    fn test_html_export_structure() {
        let (html, stats) = HtmlExporter::new()
            .render(&sample_doc(), &ExportOptions::default())
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>&lt;Guide&gt;</title>"));
        assert!(html.contains("<div class=\"cover\">"));
        assert!(html.contains("<li>Start <span class=\"toc-page\">p. 1</span></li>"));
        assert!(html.contains("<li>Next <span class=\"toc-page\">p. 2</span></li>"));
        assert!(!html.contains("<li>Detail"));
        assert_eq!(html.matches(PAGE_BREAK).count(), 1);
        assert!(!html.contains("<script"));
        assert_eq!(stats.page_count, 2);
    }

    #[test]
    fn test_front_matter_can_be_disabled() {
        let options = ExportOptions::new().with_cover(false).with_toc(false);
        let (html, _) = HtmlExporter::new().render(&sample_doc(), &options).unwrap();
        assert!(!html.contains("class=\"cover\""));
        assert!(!html.contains("class=\"toc\""));
    }

    #[test]
    fn test_toc_empty_without_headings() {
        let mut doc = Document::new("", TemplateStyles::default());
        doc.add_page(Page::with_elements(vec![Element::paragraph("x")]));
        assert_eq!(toc_html(&doc, "toc"), "");
    }

    #[test]
    fn test_print_export() {
        let (html, _) = PrintExporter::new()
            .render(&sample_doc(), &ExportOptions::default())
            .unwrap();
        assert!(html.contains("@page { margin: 2cm; }"));
        assert!(html.contains("<div class=\"toc page-break\">"));
    }
}
