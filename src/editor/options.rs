//! Editor session options.

use crate::model::DEFAULT_TITLE;
use crate::template::DEFAULT_TEMPLATE;

/// Options for an editor session.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Template applied to new documents
    pub template: String,

    /// Title given to new documents
    pub document_title: String,

    /// Placeholder content of new text elements
    pub placeholder_text: String,

    /// Placeholder content of new headings
    pub heading_placeholder: String,

    /// Placeholder content of new blockquotes
    pub quote_placeholder: String,

    /// Level of new headings (1-6)
    pub default_heading_level: u8,
}

impl EditorOptions {
    /// Create new editor options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template for new documents.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Set the title for new documents.
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = title.into();
        self
    }

    /// Set the placeholder content of new text elements.
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    /// Set the placeholder content of new headings.
    pub fn with_heading_placeholder(mut self, text: impl Into<String>) -> Self {
        self.heading_placeholder = text.into();
        self
    }

    /// Set the placeholder content of new blockquotes.
    pub fn with_quote_placeholder(mut self, text: impl Into<String>) -> Self {
        self.quote_placeholder = text.into();
        self
    }

    /// Set the level of new headings.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.default_heading_level = level.clamp(1, 6);
        self
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            document_title: DEFAULT_TITLE.to_string(),
            placeholder_text: "Click to edit this text...".to_string(),
            heading_placeholder: "New Heading".to_string(),
            quote_placeholder: "Quoted text...".to_string(),
            default_heading_level: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_options_builder() {
        let options = EditorOptions::new()
            .with_template("academic")
            .with_heading_level(9)
            .with_placeholder_text("Type here");

        assert_eq!(options.template, "academic");
        assert_eq!(options.default_heading_level, 6);
        assert_eq!(options.placeholder_text, "Type here");
        assert_eq!(EditorOptions::default().template, "kindle-standard");
    }
}
