//! Whole-document HTML projection for preview and export.

use crate::error::Result;
use crate::model::{Document, Element, ElementBody, Page, TemplateStyles};

use super::markup::{css_value_or, element_html, escape_html, wrap_with_styles};
use super::visitor::{ElementVisitor, VisitorAction};
use super::{DocumentStats, PreviewOptions, RenderResult};

/// Marker inserted between consecutive pages.
pub const PAGE_BREAK: &str = "<div style=\"page-break-before: always;\"></div>";

/// Convert a document to a standalone preview HTML page.
pub fn to_preview_html(doc: &Document) -> String {
    let mut renderer = PreviewRenderer::new(PreviewOptions::default());
    let body = renderer.render_body(doc);
    html_page(&doc.title, &preview_css(&doc.styles), &body)
}

/// Convert a document to preview HTML with custom options.
pub fn to_preview_html_with(doc: &Document, options: &PreviewOptions) -> Result<String> {
    PreviewRenderer::new(options.clone()).render(doc)
}

/// Convert a document to preview HTML with statistics.
pub fn to_preview_html_with_stats(doc: &Document, options: &PreviewOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    PreviewRenderer::new(options).render_with_stats(doc)
}

/// Preview renderer.
pub struct PreviewRenderer {
    options: PreviewOptions,
    stats: DocumentStats,
    visitor: Option<Box<dyn ElementVisitor>>,
}

impl PreviewRenderer {
    /// Create a new preview renderer.
    pub fn new(options: PreviewOptions) -> Self {
        Self {
            options,
            stats: DocumentStats::new(),
            visitor: None,
        }
    }

    /// Route every element through a visitor before projecting it.
    pub fn with_visitor<V: ElementVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render a document to a standalone HTML page.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        let body = self.render_body(doc);
        Ok(html_page(self.title_for(doc), &preview_css(&doc.styles), &body))
    }

    /// Render a document to HTML with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let body = self.render_body(doc);
        let title = self.title_for(doc).to_string();
        let content = html_page(&title, &preview_css(&doc.styles), &body);
        Ok(RenderResult::new(content, title, self.stats))
    }

    /// Render only the page bodies, joined by page-break markers.
    ///
    /// Empty pages contribute nothing but still get a separator. No marker
    /// follows the last page.
    pub fn render_body(&mut self, doc: &Document) -> String {
        self.render_pages(doc).join(PAGE_BREAK)
    }

    /// Render each selected page separately, in document order.
    pub fn render_pages(&mut self, doc: &Document) -> Vec<String> {
        let mut pages = Vec::with_capacity(doc.page_count());
        for (index, page) in doc.pages.iter().enumerate() {
            let number = (index + 1) as u32;
            if self.options.page_selection.includes(number) {
                pages.push(self.render_page(number, page));
            }
        }
        pages
    }

    /// Statistics collected so far.
    pub fn stats(&self) -> &DocumentStats {
        &self.stats
    }

    fn title_for<'a>(&'a self, doc: &'a Document) -> &'a str {
        self.options.title.as_deref().unwrap_or(&doc.title)
    }

    fn render_page(&mut self, number: u32, page: &Page) -> String {
        if self.options.collect_stats {
            self.stats.add_page();
        }
        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_page_start(number);
        }

        let mut output = String::new();
        for element in &page.elements {
            match self.visit(element) {
                VisitorAction::Skip => {
                    if self.options.collect_stats {
                        self.stats.add_skipped();
                    }
                }
                VisitorAction::Replace(markup) => {
                    self.count(element);
                    output.push_str(&markup);
                }
                VisitorAction::Continue => {
                    self.count(element);
                    output.push_str(&self.render_element(element));
                }
            }
        }

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.on_page_end(number);
        }
        output
    }

    fn render_element(&self, element: &Element) -> String {
        let markup = element_html(element);
        if self.options.include_element_styles {
            wrap_with_styles(&markup, &element.styles, None)
        } else {
            markup
        }
    }

    fn visit(&mut self, element: &Element) -> VisitorAction {
        let Some(visitor) = self.visitor.as_mut() else {
            return VisitorAction::Continue;
        };
        match &element.body {
            ElementBody::Paragraph { content } => visitor.visit_paragraph(content),
            ElementBody::Heading { level, content } => visitor.visit_heading(content, *level),
            ElementBody::Image { src, alt, caption } => visitor.visit_image(src, alt, caption),
            ElementBody::Blockquote { content } => visitor.visit_blockquote(content),
            ElementBody::Generic { kind, content } => visitor.visit_other(kind, content),
        }
    }

    fn count(&mut self, element: &Element) {
        if self.options.collect_stats {
            self.stats.add_element(element.kind());
            self.stats.count_text(&element.plain_text());
        }
    }
}

/// Wrap a body in a standalone HTML page.
pub fn html_page(title: &str, css: &str, body: &str) -> String {
    html_page_with_head(title, "", css, body)
}

/// Wrap a body in a standalone HTML page with extra `<head>` lines.
pub fn html_page_with_head(title: &str, head_extra: &str, css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n{}    <title>{}</title>\n    <style>\n{}    </style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        head_extra,
        escape_html(title),
        css,
        body
    )
}

/// Template-derived base CSS, with the editor's fallbacks for unset values.
pub fn preview_css(styles: &TemplateStyles) -> String {
    let body_font = styles.body_font();
    let heading_font = styles.heading_font();
    let margins = styles.margins.as_ref();
    let colors = styles.colors.as_ref();

    let family = css_value_or(body_font.and_then(|f| f.family.as_deref()), "Georgia");
    let size = css_value_or(body_font.and_then(|f| f.size.as_deref()), "11pt");
    let line_height = css_value_or(body_font.and_then(|f| f.line_height.as_deref()), "1.4");
    let top = css_value_or(margins.and_then(|m| m.top.as_deref()), "0.75in");
    let right = css_value_or(margins.and_then(|m| m.right.as_deref()), "0.5in");
    let bottom = css_value_or(margins.and_then(|m| m.bottom.as_deref()), "0.75in");
    let left = css_value_or(margins.and_then(|m| m.left.as_deref()), "0.5in");
    let text = css_value_or(colors.and_then(|c| c.text.as_deref()), "#000000");
    let heading_family = css_value_or(heading_font.and_then(|f| f.family.as_deref()), "Georgia");
    let heading_color = css_value_or(colors.and_then(|c| c.heading.as_deref()), "#2c3e50");

    format!(
        "        body {{\n            font-family: {family};\n            font-size: {size};\n            line-height: {line_height};\n            margin: {top} {right} {bottom} {left};\n            color: {text};\n        }}\n        h1, h2, h3, h4, h5, h6 {{\n            font-family: {heading_family};\n            color: {heading_color};\n        }}\n        img {{ max-width: 100%; height: auto; }}\n        .caption {{ font-style: italic; text-align: center; margin-top: 0.5em; }}\n"
    )
}
