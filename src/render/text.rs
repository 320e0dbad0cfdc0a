//! Plain text rendering.

use crate::model::Document;

use super::PreviewOptions;

/// Convert a document to plain text, one blank line between elements.
///
/// Only pages in the options' page selection are included.
pub fn to_text(doc: &Document, options: &PreviewOptions) -> String {
    doc.pages
        .iter()
        .enumerate()
        .filter(|(index, _)| options.page_selection.includes((*index + 1) as u32))
        .map(|(_, page)| page.plain_text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Page, TemplateStyles};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new("kindle-standard", TemplateStyles::default());
        doc.add_page(Page::with_elements(vec![
            Element::heading(1, "Hello, world!"),
            Element::paragraph("Second paragraph."),
        ]));
        doc.add_page(Page::new());
        doc.add_page(Page::with_elements(vec![Element::paragraph("Last.")]));

        let result = to_text(&doc, &PreviewOptions::default());
        assert!(result.starts_with("Hello, world!"));
        assert!(result.contains("Second paragraph."));
        assert!(result.ends_with("Last."));

        let first = to_text(&doc, &PreviewOptions::new().with_page_list(vec![1]));
        assert!(!first.contains("Last."));
    }
}
