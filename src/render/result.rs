//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Title of the rendered document
    pub title: String,

    /// Rendering statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, title: impl Into<String>, stats: DocumentStats) -> Self {
        Self {
            content,
            title: title.into(),
            stats,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            title: String::new(),
            stats: DocumentStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counts collected while walking a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Pages rendered
    pub page_count: u32,

    /// Paragraph elements
    pub paragraph_count: u32,

    /// Heading elements
    pub heading_count: u32,

    /// Image elements
    pub image_count: u32,

    /// Blockquote elements
    pub blockquote_count: u32,

    /// Elements of any other kind
    pub other_count: u32,

    /// Elements dropped by a visitor
    pub skipped_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Increment the counter for an element kind.
    pub fn add_element(&mut self, kind: &str) {
        match kind {
            "paragraph" => self.paragraph_count += 1,
            "heading" => self.heading_count += 1,
            "image" => self.image_count += 1,
            "blockquote" => self.blockquote_count += 1,
            _ => self.other_count += 1,
        }
    }

    /// Increment skipped element count.
    pub fn add_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Total elements counted, skipped ones excluded.
    pub fn element_count(&self) -> u32 {
        self.paragraph_count
            + self.heading_count
            + self.image_count
            + self.blockquote_count
            + self.other_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &DocumentStats) {
        self.page_count += other.page_count;
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.image_count += other.image_count;
        self.blockquote_count += other.blockquote_count;
        self.other_count += other.other_count;
        self.skipped_count += other.skipped_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
