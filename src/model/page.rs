//! Page-level types.

use super::{Element, ElementId};
use serde::{Deserialize, Serialize};

/// A user-created page: an ordered container of elements.
///
/// Pages have no identity outside their document; the id only exists so the
/// stored JSON matches what the editor backend writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page identifier
    pub id: String,

    /// Elements in display order
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self {
            id: super::generate_id("page"),
            elements: Vec::new(),
        }
    }

    /// Create a page holding the given elements.
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::new()
        }
    }

    /// Append an element.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Find an element by id.
    pub fn find_element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| &el.id == id)
    }

    /// Find an element by id, mutably.
    pub fn find_element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| &el.id == id)
    }

    /// Remove an element by id, returning it.
    pub fn remove_element(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|el| &el.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(|el| el.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements on the page.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
