//! E-book flavored exports: EPUB-style, DOCX-style, and Kindle HTML.

use super::html::front_matter;
use super::{
    export_title, render_page_list, render_pages, safe_file_stem, ExportFormat, ExportOptions,
    Exporter,
};
use crate::error::Result;
use crate::model::{Document, TemplateStyles};
use crate::render::markup::{css_value_or, escape_html};
use crate::render::preview::html_page_with_head;
use crate::render::DocumentStats;

const EPUB_CSS: &str = "\
        body { font-family: Georgia, serif; line-height: 1.6; max-width: 600px; margin: 0 auto; padding: 20px; }
        h1, h2 { color: #2c3e50; }
        img { max-width: 100%; height: auto; }
        .caption { font-style: italic; text-align: center; margin-top: 0.5em; }
        .toc ul { list-style: none; padding: 0; }
";

const DOCX_CSS: &str = "\
        body { font-family: 'Times New Roman', serif; line-height: 1.5; margin: 2cm; }
        h1, h2 { color: #000; }
        img { max-width: 100%; height: auto; }
        .caption { font-style: italic; text-align: center; margin-top: 0.5em; }
        .toc ul { list-style: none; padding: 0; }
";

/// Shown by the Kindle export for a document without pages.
const KINDLE_EMPTY: &str = "<p>Content not available</p>";

/// Exporter producing HTML ready for conversion to EPUB.
#[derive(Debug, Clone, Default)]
pub struct EpubExporter;

impl EpubExporter {
    /// Create a new EPUB exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for EpubExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Epub
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<(String, DocumentStats)> {
        let (pages, stats) = render_pages(doc, options);
        let title = export_title(doc, options);
        let body = format!("{}{}", front_matter(doc, title, options, "toc"), pages);
        Ok((html_page_with_head(title, "", EPUB_CSS, &body), stats))
    }
}

/// Exporter producing HTML ready to be opened and saved by a word processor.
#[derive(Debug, Clone, Default)]
pub struct DocxExporter;

impl DocxExporter {
    /// Create a new DOCX exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for DocxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<(String, DocumentStats)> {
        let (pages, stats) = render_pages(doc, options);
        let title = export_title(doc, options);
        let body = format!("{}{}", front_matter(doc, title, options, "toc"), pages);
        Ok((html_page_with_head(title, "", DOCX_CSS, &body), stats))
    }
}

/// Exporter producing Kindle-compatible XHTML styled from the template.
#[derive(Debug, Clone, Default)]
pub struct KindleExporter;

impl KindleExporter {
    /// Create a new Kindle exporter.
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for KindleExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Kindle
    }

    /// Kindle files are named after the document id, not the title.
    fn file_name(&self, doc: &Document) -> String {
        format!("kindle_{}.html", safe_file_stem(&doc.id))
    }

    fn render(&self, doc: &Document, options: &ExportOptions) -> Result<(String, DocumentStats)> {
        let (pages, stats) = render_page_list(doc, options);
        let title = export_title(doc, options);
        let title = if title.is_empty() { "E-book" } else { title };

        let body = if pages.is_empty() {
            KINDLE_EMPTY.to_string()
        } else {
            pages
                .iter()
                .map(|page| format!("<div class=\"page\">{}</div>", page))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Ok((
            format!(
                "<!DOCTYPE html>\n<html xmlns=\"http://www.w3.org/1999/xhtml\">\n<head>\n    <meta charset=\"utf-8\"/>\n    <title>{}</title>\n    <style type=\"text/css\">\n{}    </style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
                escape_html(title),
                kindle_css(&doc.styles),
                body
            ),
            stats,
        ))
    }
}

/// Template-driven CSS for Kindle readers.
fn kindle_css(styles: &TemplateStyles) -> String {
    let body_font = styles.body_font();
    let heading_font = styles.heading_font();
    let caption_font = styles.caption_font();
    let margins = styles.margins.as_ref();
    let colors = styles.colors.as_ref();

    let top = css_value_or(margins.and_then(|m| m.top.as_deref()), "0.75in");
    let right = css_value_or(margins.and_then(|m| m.right.as_deref()), "0.5in");
    let bottom = css_value_or(margins.and_then(|m| m.bottom.as_deref()), "0.75in");
    let left = css_value_or(margins.and_then(|m| m.left.as_deref()), "0.5in");
    let family = css_value_or(body_font.and_then(|f| f.family.as_deref()), "Georgia");
    let size = css_value_or(body_font.and_then(|f| f.size.as_deref()), "11pt");
    let line_height = css_value_or(body_font.and_then(|f| f.line_height.as_deref()), "1.4");
    let text = css_value_or(colors.and_then(|c| c.text.as_deref()), "#000000");
    let heading_family = css_value_or(heading_font.and_then(|f| f.family.as_deref()), "Georgia");
    let heading_weight = css_value_or(heading_font.and_then(|f| f.weight.as_deref()), "bold");
    let heading_size = css_value_or(heading_font.and_then(|f| f.size.as_deref()), "18pt");
    let heading_color = css_value_or(colors.and_then(|c| c.heading.as_deref()), "#2c3e50");
    let caption_family = css_value_or(caption_font.and_then(|f| f.family.as_deref()), "Arial");
    let caption_size = css_value_or(caption_font.and_then(|f| f.size.as_deref()), "9pt");
    let caption_style = css_value_or(caption_font.and_then(|f| f.style.as_deref()), "italic");
    let accent = css_value_or(colors.and_then(|c| c.accent.as_deref()), "#3498db");

    format!(
        "        @page {{ margin: {top} {right} {bottom} {left}; }}
        body {{
            font-family: {family};
            font-size: {size};
            line-height: {line_height};
            color: {text};
            text-align: justify;
        }}
        h1, h2, h3, h4, h5, h6 {{
            font-family: {heading_family};
            font-weight: {heading_weight};
            color: {heading_color};
            page-break-after: avoid;
        }}
        h1 {{ font-size: {heading_size}; }}
        h2 {{ font-size: calc({heading_size} * 0.9); }}
        h3 {{ font-size: calc({heading_size} * 0.8); }}
        p {{ margin-bottom: 1em; text-indent: 1.5em; }}
        .page + .page {{ page-break-before: always; }}
        img {{ max-width: 100%; height: auto; display: block; margin: 1em auto; }}
        .caption {{
            font-family: {caption_family};
            font-size: {caption_size};
            font-style: {caption_style};
            text-align: center;
            margin-top: 0.5em;
        }}
        blockquote {{
            margin: 1em 2em;
            font-style: italic;
            border-left: 3px solid {accent};
            padding-left: 1em;
        }}
"
    )
}
