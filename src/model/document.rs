//! Document-level types.

use super::{ElementBody, Page, TemplateStyles};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title given to documents created by the editor.
pub const DEFAULT_TITLE: &str = "Untitled Document";

/// The full editable unit: ordered pages plus template styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document identifier
    pub id: String,

    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    /// Active template id
    #[serde(default)]
    pub template: String,

    /// Pages in display and export order
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Styles of the active template
    #[serde(default)]
    pub styles: TemplateStyles,

    /// Timestamps
    #[serde(default)]
    pub metadata: Metadata,

    /// Project the document belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Chapter of the project the document was generated for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<String>,

    /// Fields written by other tools, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Document {
    /// Create a new empty document using the given template.
    pub fn new(template: impl Into<String>, styles: TemplateStyles) -> Self {
        Self {
            id: super::generate_id("doc"),
            title: default_title(),
            template: template.into(),
            pages: Vec::new(),
            styles,
            metadata: Metadata::new(),
            project_id: None,
            chapter_id: None,
            extra: Map::new(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Link the document to a project chapter.
    pub fn with_chapter(
        mut self,
        project_id: impl Into<String>,
        chapter_id: impl Into<String>,
    ) -> Self {
        self.project_id = Some(project_id.into());
        self.chapter_id = Some(chapter_id.into());
        self
    }

    /// Parse a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by index (0-based).
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Get a page by index (0-based), mutably.
    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    /// Append a page, returning its index.
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Total number of elements across all pages.
    pub fn element_count(&self) -> usize {
        self.pages.iter().map(Page::element_count).sum()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Record a modification.
    pub fn touch(&mut self) {
        self.metadata.last_modified = Utc::now();
    }

    /// Build an outline from the document's headings.
    pub fn outline(&self) -> Outline {
        let mut outline = Outline::new();
        for (index, page) in self.pages.iter().enumerate() {
            for element in &page.elements {
                if let ElementBody::Heading { level, content } = &element.body {
                    outline.add_item(OutlineItem::new(content.clone(), index + 1, *level));
                }
            }
        }
        outline
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Creation time
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last modification time
    #[serde(default = "Utc::now")]
    pub last_modified: DateTime<Utc>,
}

impl Metadata {
    /// Metadata stamped with the current time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            last_modified: now,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat list of the document's headings, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Outline entries
    pub items: Vec<OutlineItem>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the outline.
    pub fn add_item(&mut self, item: OutlineItem) {
        self.items.push(item);
    }

    /// Check if the outline is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Entries at or above the given heading depth.
    pub fn up_to_level(&self, max_level: u8) -> impl Iterator<Item = &OutlineItem> {
        self.items.iter().filter(move |item| item.level <= max_level)
    }
}

/// A single heading entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    /// Heading text
    pub title: String,

    /// Page number (1-indexed)
    pub page: usize,

    /// Heading level (1-6)
    pub level: u8,
}

impl OutlineItem {
    /// Create a new outline item.
    pub fn new(title: impl Into<String>, page: usize, level: u8) -> Self {
        Self {
            title: title.into(),
            page,
            level,
        }
    }
}
