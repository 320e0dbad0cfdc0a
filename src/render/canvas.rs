//! Live canvas: the current page projected into id-tagged nodes.

use crate::model::{Document, ElementId, Page};

use super::markup::{element_html, escape_html, wrap_with_styles};

/// One rendered element on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasNode {
    /// Id of the element this node displays
    pub element_id: ElementId,

    /// Element kind (`paragraph`, `heading`, ...)
    pub kind: String,

    /// Whether this node is the current selection
    pub selected: bool,

    /// Element content markup, inline styles applied
    pub markup: String,
}

impl CanvasNode {
    /// Render the node with its edit/delete controls.
    pub fn to_html(&self) -> String {
        let class = if self.selected {
            "editor-element selected"
        } else {
            "editor-element"
        };
        let id = escape_html(self.element_id.as_str());
        format!(
            "<div class=\"{class}\" data-element-id=\"{id}\">\
<div class=\"element-controls\">\
<button class=\"control-btn\" data-action=\"edit\" data-element-id=\"{id}\" title=\"Edit\">Edit</button>\
<button class=\"control-btn\" data-action=\"delete\" data-element-id=\"{id}\" title=\"Delete\">Delete</button>\
</div>{markup}</div>",
            markup = self.markup
        )
    }
}

/// The visual tree of the page being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanvasView {
    page_index: Option<usize>,
    nodes: Vec<CanvasNode>,
}

impl CanvasView {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-project a page of the document.
    ///
    /// Prior state is discarded first. A missing document or page leaves the
    /// canvas empty.
    pub fn render(
        &mut self,
        doc: Option<&Document>,
        page_index: usize,
        selected: Option<&ElementId>,
    ) {
        self.clear();
        let Some(page) = doc.and_then(|d| d.page(page_index)) else {
            return;
        };
        self.page_index = Some(page_index);
        self.nodes = project_page(page, selected);
    }

    /// Discard all nodes.
    pub fn clear(&mut self) {
        self.page_index = None;
        self.nodes.clear();
    }

    /// Move the selection highlight to `id` (or clear it).
    pub fn mark_selected(&mut self, id: Option<&ElementId>) {
        for node in &mut self.nodes {
            node.selected = Some(&node.element_id) == id;
        }
    }

    /// Find the node for an element id.
    pub fn node(&self, id: &ElementId) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| &n.element_id == id)
    }

    /// Check whether an element is currently displayed.
    pub fn contains(&self, id: &ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Nodes in page order.
    pub fn nodes(&self) -> &[CanvasNode] {
        &self.nodes
    }

    /// Index of the displayed page, if any.
    pub fn page_index(&self) -> Option<usize> {
        self.page_index
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if nothing is displayed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of the displayed elements, in order.
    pub fn element_ids(&self) -> Vec<&ElementId> {
        self.nodes.iter().map(|n| &n.element_id).collect()
    }

    /// Render the canvas as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"page-canvas\">");
        for node in &self.nodes {
            html.push_str(&node.to_html());
        }
        html.push_str("</div>");
        html
    }
}

fn project_page(page: &Page, selected: Option<&ElementId>) -> Vec<CanvasNode> {
    page.elements
        .iter()
        .map(|element| CanvasNode {
            element_id: element.id.clone(),
            kind: element.kind().to_string(),
            selected: Some(&element.id) == selected,
            markup: wrap_with_styles(
                &element_html(element),
                &element.styles,
                Some("element-content"),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, TemplateStyles};

    fn sample_doc() -> Document {
        let mut doc = Document::new("kindle-standard", TemplateStyles::default());
        doc.add_page(Page::with_elements(vec![
            Element::heading(1, "Title").with_id("el_a"),
            Element::paragraph("Body").with_id("el_b"),
        ]));
        doc.add_page(Page::new());
        doc
    }

    #[test]
    fn test_render_projects_page_in_order() {
        let doc = sample_doc();
        let mut canvas = CanvasView::new();
        canvas.render(Some(&doc), 0, None);

        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.page_index(), Some(0));
        let ids: Vec<&str> = canvas.element_ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["el_a", "el_b"]);
        assert_eq!(
            canvas.nodes()[1].markup,
            "<div class=\"element-content\"><p>Body</p></div>"
        );
    }

    #[test]
    fn test_render_clears_prior_state() {
        let doc = sample_doc();
        let mut canvas = CanvasView::new();
        canvas.render(Some(&doc), 0, None);
        canvas.render(Some(&doc), 1, None);
        assert!(canvas.is_empty());

        canvas.render(Some(&doc), 7, None);
        assert!(canvas.is_empty());
        assert_eq!(canvas.page_index(), None);

        canvas.render(None, 0, None);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_selection_flag() {
        let doc = sample_doc();
        let mut canvas = CanvasView::new();
        let selected = ElementId::from("el_b");
        canvas.render(Some(&doc), 0, Some(&selected));

        assert!(!canvas.nodes()[0].selected);
        assert!(canvas.nodes()[1].selected);

        canvas.mark_selected(None);
        assert!(canvas.nodes().iter().all(|n| !n.selected));
    }

    #[test]
    fn test_node_html_has_controls_and_escaped_id() {
        let mut doc = sample_doc();
        doc.pages[1].add_element(Element::paragraph("x").with_id("el_\"q"));
        let mut canvas = CanvasView::new();
        canvas.render(Some(&doc), 1, None);

        let html = canvas.to_html();
        assert!(html.contains("data-element-id=\"el_&quot;q\""));
        assert!(html.contains("data-action=\"edit\""));
        assert!(html.contains("data-action=\"delete\""));
    }
}
