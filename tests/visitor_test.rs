//! Integration tests for the visitor pattern.

use pagewright::model::{Document, Element, Page, TemplateStyles};
use pagewright::render::visitor::{
    CompositeVisitor, DefaultVisitor, ElementVisitor, MaxHeadingDepthVisitor, SkipImagesVisitor,
    VisitorAction,
};
use pagewright::render::{PreviewOptions, PreviewRenderer};

/// Custom visitor that tracks visit counts.
#[derive(Default)]
struct CountingVisitor {
    paragraph_count: usize,
    image_count: usize,
    heading_count: usize,
    quote_count: usize,
    pages_started: Vec<u32>,
    pages_ended: Vec<u32>,
}

impl ElementVisitor for CountingVisitor {
    fn visit_paragraph(&mut self, _content: &str) -> VisitorAction {
        self.paragraph_count += 1;
        VisitorAction::Continue
    }

    fn visit_image(&mut self, _src: &str, _alt: &str, _caption: &str) -> VisitorAction {
        self.image_count += 1;
        VisitorAction::Continue
    }

    fn visit_heading(&mut self, _text: &str, _level: u8) -> VisitorAction {
        self.heading_count += 1;
        VisitorAction::Continue
    }

    fn visit_blockquote(&mut self, _content: &str) -> VisitorAction {
        self.quote_count += 1;
        VisitorAction::Continue
    }

    fn on_page_start(&mut self, page_number: u32) {
        self.pages_started.push(page_number);
    }

    fn on_page_end(&mut self, page_number: u32) {
        self.pages_ended.push(page_number);
    }
}

/// Visitor that replaces every paragraph with a marker.
struct RedactingVisitor;

impl ElementVisitor for RedactingVisitor {
    fn visit_paragraph(&mut self, _content: &str) -> VisitorAction {
        VisitorAction::Replace("<p>[redacted]</p>".to_string())
    }
}

fn sample_document() -> Document {
    let mut doc = Document::new("kindle-standard", TemplateStyles::default()).with_title("Visits");
    doc.add_page(Page::with_elements(vec![
        Element::heading(1, "Title"),
        Element::paragraph("Secret plans"),
        Element::image("cover.png", "Cover"),
    ]));
    doc.add_page(Page::with_elements(vec![
        Element::heading(4, "Deep section"),
        Element::blockquote("Quoted"),
    ]));
    doc
}

#[test]
fn test_default_visitor_all_continue() {
    let mut visitor = DefaultVisitor::new();

    assert_eq!(visitor.visit_paragraph("text"), VisitorAction::Continue);
    assert_eq!(visitor.visit_heading("Test", 1), VisitorAction::Continue);
    assert_eq!(
        visitor.visit_image("a.png", "alt", ""),
        VisitorAction::Continue
    );
    assert_eq!(visitor.visit_blockquote("q"), VisitorAction::Continue);
    assert_eq!(visitor.visit_other("list", "x"), VisitorAction::Continue);
}

#[test]
fn test_skip_images_visitor() {
    let mut visitor = SkipImagesVisitor;

    // Images should be skipped
    let action = visitor.visit_image("a.png", "Alt text", "");
    assert!(action.should_skip());

    // Other elements should continue
    let action = visitor.visit_paragraph("text");
    assert_eq!(action, VisitorAction::Continue);
}

#[test]
fn test_max_heading_depth_visitor() {
    let mut visitor = MaxHeadingDepthVisitor::new(2);

    // H1 stays as is
    let action = visitor.visit_heading("Title", 1);
    assert_eq!(action, VisitorAction::Continue);

    // H4 becomes H2
    let action = visitor.visit_heading("Subsection", 4);
    assert!(action.is_replace());
    let content = action.replacement().unwrap();
    assert!(content.starts_with("<h2"));
    assert!(content.contains("Subsection"));
}

#[test]
fn test_max_heading_depth_escapes_text() {
    let mut visitor = MaxHeadingDepthVisitor::new(1);
    let action = visitor.visit_heading("<script>", 3);
    let content = action.replacement().unwrap();
    assert!(content.contains("&lt;script&gt;"));
    assert!(!content.contains("<script>"));
}

#[test]
fn test_composite_visitor_chaining() {
    let mut composite = CompositeVisitor::new()
        .with_visitor(SkipImagesVisitor)
        .with_visitor(MaxHeadingDepthVisitor::new(3))
        .with_visitor(DefaultVisitor);

    // First matching action wins
    let action = composite.visit_image("a.png", "alt", "");
    assert!(action.should_skip());

    // Heading goes to second visitor
    let action = composite.visit_heading("Test", 5);
    assert!(action.is_replace());
    assert!(action.replacement().unwrap().starts_with("<h3"));

    // Paragraph continues through all
    let action = composite.visit_paragraph("text");
    assert_eq!(action, VisitorAction::Continue);
}

#[test]
fn test_visitor_action_methods() {
    let continue_action = VisitorAction::Continue;
    assert!(!continue_action.should_skip());
    assert!(!continue_action.is_replace());
    assert!(continue_action.replacement().is_none());

    let skip_action = VisitorAction::Skip;
    assert!(skip_action.should_skip());
    assert!(!skip_action.is_replace());
    assert!(skip_action.replacement().is_none());

    let replace_action = VisitorAction::Replace("replaced".to_string());
    assert!(!replace_action.should_skip());
    assert!(replace_action.is_replace());
    assert_eq!(replace_action.replacement(), Some("replaced"));
}

#[test]
fn test_renderer_skips_images() {
    let doc = sample_document();
    let mut renderer =
        PreviewRenderer::new(PreviewOptions::new().with_stats(true)).with_visitor(SkipImagesVisitor);
    let body = renderer.render_body(&doc);

    assert!(!body.contains("<img"));
    assert!(body.contains("Secret plans"));
    assert_eq!(renderer.stats().image_count, 0);
    assert_eq!(renderer.stats().skipped_count, 1);
}

#[test]
fn test_renderer_replaces_paragraphs() {
    let doc = sample_document();
    let html = PreviewRenderer::new(PreviewOptions::default())
        .with_visitor(RedactingVisitor)
        .render(&doc)
        .unwrap();

    assert!(html.contains("<p>[redacted]</p>"));
    assert!(!html.contains("Secret plans"));
    assert!(html.contains("Quoted"));
}

#[test]
fn test_renderer_flattens_deep_headings() {
    let doc = sample_document();
    let body = PreviewRenderer::new(PreviewOptions::default())
        .with_visitor(MaxHeadingDepthVisitor::new(2))
        .render_body(&doc);

    assert!(!body.contains("<h4"));
    assert!(body.contains("Deep section</h2>"));
}

#[test]
fn test_page_selection_with_visitor() {
    let mut doc = sample_document();
    doc.add_page(Page::new());

    let mut renderer = PreviewRenderer::new(PreviewOptions::new().with_page_list(vec![1, 3]))
        .with_visitor(CompositeVisitor::new().with_visitor(DefaultVisitor));
    let pages = renderer.render_pages(&doc);
    assert_eq!(pages.len(), 2);
    assert!(pages[1].is_empty());
}

#[test]
fn test_counting_visitor() {
    let mut visitor = CountingVisitor::default();

    visitor.visit_paragraph("a");
    visitor.visit_paragraph("b");
    visitor.visit_image("a.png", "", "");
    visitor.visit_heading("Test", 1);
    visitor.visit_heading("Sub", 2);
    visitor.visit_blockquote("q");
    visitor.on_page_start(1);
    visitor.on_page_end(1);

    assert_eq!(visitor.paragraph_count, 2);
    assert_eq!(visitor.image_count, 1);
    assert_eq!(visitor.heading_count, 2);
    assert_eq!(visitor.quote_count, 1);
    assert_eq!(visitor.pages_started, vec![1]);
    assert_eq!(visitor.pages_ended, vec![1]);
}
