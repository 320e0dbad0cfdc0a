//! Integration tests for the preview projector.

use pagewright::model::{Document, Element, FontSpec, Fonts, Page, TemplateStyles};
use pagewright::render::{
    to_preview_html, to_preview_html_with, to_preview_html_with_stats, to_text, PageSelection,
    PreviewOptions, PAGE_BREAK,
};

fn create_sample_document() -> Document {
    let mut doc = Document::new("kindle-standard", TemplateStyles::default()).with_title("Sample");

    doc.add_page(Page::with_elements(vec![
        Element::heading(1, "Introduction").with_style("color", "#333333"),
        Element::paragraph("This is the introduction."),
    ]));
    doc.add_page(Page::with_elements(vec![
        Element::heading(2, "Chapter 1"),
        Element::image("figure.png", "Figure").with_caption("A figure"),
    ]));
    doc.add_page(Page::with_elements(vec![Element::blockquote(
        "Conclusion text.",
    )]));

    doc
}

#[test]
fn test_preview_contains_every_element_in_order() {
    let html = to_preview_html(&create_sample_document());

    let order = [
        "Introduction",
        "This is the introduction.",
        "Chapter 1",
        "src=\"figure.png\"",
        "<div class=\"caption\">A figure</div>",
        "<blockquote>Conclusion text.</blockquote>",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches(PAGE_BREAK).count(), 2);
}

#[test]
fn test_empty_pages_still_separate() {
    let mut doc = Document::new("kindle-standard", TemplateStyles::default());
    doc.add_page(Page::with_elements(vec![
        Element::paragraph("A"),
        Element::paragraph("B"),
    ]));
    doc.add_page(Page::new());
    doc.add_page(Page::with_elements(vec![Element::paragraph("C")]));

    let html = to_preview_html(&doc);
    let expected = format!("<p>A</p><p>B</p>{0}{0}<p>C</p>", PAGE_BREAK);
    assert!(html.contains(&expected));
    assert_eq!(html.matches(PAGE_BREAK).count(), 2);
}

#[test]
fn test_template_css_and_fallbacks() {
    let html = to_preview_html(&create_sample_document());
    assert!(html.contains("font-family: Georgia;"));
    assert!(html.contains("font-size: 11pt;"));
    assert!(html.contains("margin: 0.75in 0.5in 0.75in 0.5in;"));
    assert!(html.contains("color: #2c3e50;"));

    let mut doc = create_sample_document();
    doc.styles = TemplateStyles {
        fonts: Some(Fonts {
            body: Some(FontSpec::new("Palatino", "12pt")),
            ..Default::default()
        }),
        ..Default::default()
    };
    let html = to_preview_html(&doc);
    assert!(html.contains("font-family: Palatino;"));
    assert!(html.contains("font-size: 12pt;"));
}

#[test]
fn test_element_styles_toggle() {
    let doc = create_sample_document();

    let styled = to_preview_html_with(&doc, &PreviewOptions::default()).unwrap();
    assert!(styled.contains("style=\"color: #333333\""));

    let plain =
        to_preview_html_with(&doc, &PreviewOptions::new().with_element_styles(false)).unwrap();
    assert!(!plain.contains("#333333"));
    assert!(plain.contains("<h1>Introduction</h1>"));
}

#[test]
fn test_page_selection() {
    let doc = create_sample_document();
    let options = PreviewOptions::new().with_pages(PageSelection::parse("2-3").unwrap());
    let html = to_preview_html_with(&doc, &options).unwrap();

    assert!(!html.contains("Introduction"));
    assert!(html.contains("Chapter 1"));
    assert_eq!(html.matches(PAGE_BREAK).count(), 1);

    let text = to_text(&doc, &PreviewOptions::new().with_page_list(vec![3]));
    assert_eq!(text, "Conclusion text.");
}

#[test]
fn test_title_override_is_escaped() {
    let doc = create_sample_document();
    let options = PreviewOptions::new().with_title("Draft <v2>");
    let html = to_preview_html_with(&doc, &options).unwrap();
    assert!(html.contains("<title>Draft &lt;v2&gt;</title>"));
}

#[test]
fn test_stats() {
    let result =
        to_preview_html_with_stats(&create_sample_document(), &PreviewOptions::default()).unwrap();

    assert_eq!(result.title, "Sample");
    assert_eq!(result.stats.page_count, 3);
    assert_eq!(result.stats.heading_count, 2);
    assert_eq!(result.stats.paragraph_count, 1);
    assert_eq!(result.stats.image_count, 1);
    assert_eq!(result.stats.blockquote_count, 1);
    assert_eq!(result.stats.element_count(), 5);
}

#[test]
fn test_invalid_page_ranges() {
    assert!(PageSelection::parse("0").is_err());
    assert!(PageSelection::parse("5-2").is_err());
    assert!(PageSelection::parse("one").is_err());
    assert_eq!(
        PageSelection::parse("1,3,5").unwrap(),
        PageSelection::Ranges(vec![1..=1, 3..=3, 5..=5])
    );
}
