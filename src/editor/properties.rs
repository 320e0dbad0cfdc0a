//! Properties panel: the form bound to the selected element.

use crate::model::{Element, ElementBody, ElementId, ElementPatch, TextAlign};
use crate::render::markup::escape_html;

/// Font size shown when the element has no override.
pub const DEFAULT_FONT_SIZE: &str = "14px";

/// Editable fields of the selected element.
///
/// Populated from the live element on selection; the fields are then edited
/// in place and committed with [`PropertiesPanel::to_patch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertiesPanel {
    /// Element the form edits
    pub element_id: ElementId,

    /// Element kind
    pub kind: String,

    /// Text content, for text variants
    pub content: Option<String>,

    /// Heading level, for headings
    pub level: Option<u8>,

    /// Caption, for images
    pub caption: Option<String>,

    /// Font size field
    pub font_size: String,

    /// Alignment field
    pub text_align: TextAlign,
}

impl PropertiesPanel {
    /// Populate the form from an element.
    pub fn from_element(element: &Element) -> Self {
        let (content, level, caption) = match &element.body {
            ElementBody::Heading { level, content } => (Some(content.clone()), Some(*level), None),
            ElementBody::Image { caption, .. } => (None, None, Some(caption.clone())),
            ElementBody::Paragraph { content }
            | ElementBody::Blockquote { content }
            | ElementBody::Generic { content, .. } => (Some(content.clone()), None, None),
        };

        Self {
            element_id: element.id.clone(),
            kind: element.kind().to_string(),
            content,
            level,
            caption,
            font_size: element
                .styles
                .font_size()
                .unwrap_or(DEFAULT_FONT_SIZE)
                .to_string(),
            text_align: element.styles.text_align().unwrap_or_default(),
        }
    }

    /// Edit the content field. Ignored for variants without content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(field) = self.content.as_mut() {
            *field = content.into();
        }
    }

    /// Edit the heading level field. Ignored for non-headings.
    pub fn set_level(&mut self, level: u8) {
        if let Some(field) = self.level.as_mut() {
            *field = level.clamp(1, 6);
        }
    }

    /// Edit the caption field. Ignored for non-images.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        if let Some(field) = self.caption.as_mut() {
            *field = caption.into();
        }
    }

    /// Edit the font size field.
    pub fn set_font_size(&mut self, size: impl Into<String>) {
        self.font_size = size.into();
    }

    /// Edit the alignment field.
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    /// The field merge committed by "Apply".
    pub fn to_patch(&self) -> ElementPatch {
        ElementPatch {
            content: self.content.clone(),
            level: self.level,
            caption: self.caption.clone(),
            font_size: Some(self.font_size.clone()),
            text_align: Some(self.text_align),
        }
    }

    /// Render the form as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"properties-panel active\">\n");

        if let Some(content) = &self.content {
            html.push_str(&format!(
                "<div class=\"property-group\"><label class=\"property-label\" for=\"elementContent\">Content</label>\
<textarea class=\"property-input\" id=\"elementContent\" rows=\"3\">{}</textarea></div>\n",
                escape_html(content)
            ));
        }

        if let Some(level) = self.level {
            let options: String = (1..=6u8)
                .map(|n| {
                    let selected = if n == level { " selected" } else { "" };
                    format!("<option value=\"{n}\"{selected}>H{n}</option>")
                })
                .collect();
            html.push_str(&format!(
                "<div class=\"property-group\"><label class=\"property-label\" for=\"headingLevel\">Level</label>\
<select class=\"property-input\" id=\"headingLevel\">{}</select></div>\n",
                options
            ));
        }

        if let Some(caption) = &self.caption {
            html.push_str(&format!(
                "<div class=\"property-group\"><label class=\"property-label\" for=\"imageCaption\">Caption</label>\
<input type=\"text\" class=\"property-input\" id=\"imageCaption\" value=\"{}\" /></div>\n",
                escape_html(caption)
            ));
        }

        html.push_str(&format!(
            "<div class=\"property-group\"><label class=\"property-label\" for=\"fontSize\">Font Size</label>\
<input type=\"text\" class=\"property-input\" id=\"fontSize\" value=\"{}\" /></div>\n",
            escape_html(&self.font_size)
        ));

        let align_options: String = TextAlign::ALL
            .iter()
            .map(|align| {
                let selected = if *align == self.text_align {
                    " selected"
                } else {
                    ""
                };
                format!(
                    "<option value=\"{}\"{}>{}</option>",
                    align.as_str(),
                    selected,
                    align.label()
                )
            })
            .collect();
        html.push_str(&format!(
            "<div class=\"property-group\"><label class=\"property-label\" for=\"textAlign\">Alignment</label>\
<select class=\"property-input\" id=\"textAlign\">{}</select></div>\n",
            align_options
        ));

        html.push_str(&format!(
            "<button class=\"btn-tool\" data-action=\"apply-properties\" data-element-id=\"{}\">Apply Changes</button>\n</div>",
            escape_html(self.element_id.as_str())
        ));
        html
    }
}
