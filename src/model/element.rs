//! Element-level types.

use super::styles::{Styles, TextAlign, FONT_SIZE, TEXT_ALIGN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-unique element identifier, used to correlate canvas nodes with model elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(super::generate_id("el"))
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single content unit on a page.
///
/// On the wire an element is a flat object with a `type` discriminator
/// (`paragraph`, `heading`, `image`, `blockquote`). Unknown types read from
/// stored documents are preserved as [`ElementBody::Generic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement", into = "RawElement")]
pub struct Element {
    /// Identifier
    pub id: ElementId,

    /// Variant-specific content
    pub body: ElementBody,

    /// Inline style overrides
    pub styles: Styles,
}

/// Variant-specific element content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementBody {
    /// A paragraph of text
    Paragraph {
        /// Text content
        content: String,
    },

    /// A heading
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Heading text
        content: String,
    },

    /// An image with optional caption
    Image {
        /// Data URI or URL
        src: String,
        /// Alternative text
        alt: String,
        /// Caption shown under the image (empty = none)
        caption: String,
    },

    /// A quoted block
    Blockquote {
        /// Quoted text
        content: String,
    },

    /// A block of unrecognized type, rendered as generic content
    Generic {
        /// The stored `type` value
        kind: String,
        /// Text content
        content: String,
    },
}

impl ElementBody {
    /// Wire name of this variant.
    pub fn kind(&self) -> &str {
        match self {
            ElementBody::Paragraph { .. } => "paragraph",
            ElementBody::Heading { .. } => "heading",
            ElementBody::Image { .. } => "image",
            ElementBody::Blockquote { .. } => "blockquote",
            ElementBody::Generic { kind, .. } => kind,
        }
    }
}

impl Element {
    /// Create an element with a fresh id and no style overrides.
    pub fn new(body: ElementBody) -> Self {
        Self {
            id: ElementId::generate(),
            body,
            styles: Styles::new(),
        }
    }

    /// Create a paragraph.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new(ElementBody::Paragraph {
            content: content.into(),
        })
    }

    /// Create a heading. The level is clamped to 1-6.
    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Self::new(ElementBody::Heading {
            level: level.clamp(1, 6),
            content: content.into(),
        })
    }

    /// Create an image without caption.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(ElementBody::Image {
            src: src.into(),
            alt: alt.into(),
            caption: String::new(),
        })
    }

    /// Create a blockquote.
    pub fn blockquote(content: impl Into<String>) -> Self {
        Self::new(ElementBody::Blockquote {
            content: content.into(),
        })
    }

    /// Replace the style overrides.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Set one style override.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.set(key, value);
        self
    }

    /// Set the caption. Ignored for non-image elements.
    pub fn with_caption(mut self, text: impl Into<String>) -> Self {
        if let ElementBody::Image { caption, .. } = &mut self.body {
            *caption = text.into();
        }
        self
    }

    /// Use a specific id instead of the generated one.
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Wire name of the element's variant.
    pub fn kind(&self) -> &str {
        self.body.kind()
    }

    /// Text content, for variants that carry one.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            ElementBody::Paragraph { content }
            | ElementBody::Heading { content, .. }
            | ElementBody::Blockquote { content }
            | ElementBody::Generic { content, .. } => Some(content),
            ElementBody::Image { .. } => None,
        }
    }

    /// Heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self.body {
            ElementBody::Heading { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Caption, if this is an image.
    pub fn caption(&self) -> Option<&str> {
        match &self.body {
            ElementBody::Image { caption, .. } => Some(caption),
            _ => None,
        }
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        matches!(self.body, ElementBody::Image { .. })
    }

    /// Check if this element is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self.body, ElementBody::Heading { .. })
    }

    /// Plain text of the element (image alt/caption for images).
    pub fn plain_text(&self) -> String {
        match &self.body {
            ElementBody::Image { alt, caption, .. } => {
                if caption.is_empty() {
                    alt.clone()
                } else {
                    caption.clone()
                }
            }
            _ => self.content().unwrap_or_default().to_string(),
        }
    }

    /// Apply a shallow field merge.
    ///
    /// Fields that do not apply to this variant are ignored. An empty font
    /// size leaves the current value untouched.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(ref new_content) = patch.content {
            match &mut self.body {
                ElementBody::Paragraph { content }
                | ElementBody::Heading { content, .. }
                | ElementBody::Blockquote { content }
                | ElementBody::Generic { content, .. } => *content = new_content.clone(),
                ElementBody::Image { .. } => {}
            }
        }

        if let (Some(new_level), ElementBody::Heading { level, .. }) = (patch.level, &mut self.body)
        {
            *level = new_level.clamp(1, 6);
        }

        if let (Some(new_caption), ElementBody::Image { caption, .. }) =
            (&patch.caption, &mut self.body)
        {
            *caption = new_caption.clone();
        }

        if let Some(ref size) = patch.font_size {
            if !size.trim().is_empty() {
                self.styles.set(FONT_SIZE, size.trim());
            }
        }

        if let Some(align) = patch.text_align {
            self.styles.set(TEXT_ALIGN, align.as_str());
        }
    }
}

/// Fields the properties panel can change on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementPatch {
    /// New text content
    pub content: Option<String>,
    /// New heading level
    pub level: Option<u8>,
    /// New image caption
    pub caption: Option<String>,
    /// New `fontSize` style value
    pub font_size: Option<String>,
    /// New `textAlign` style value
    pub text_align: Option<TextAlign>,
}

impl ElementPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the heading level.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    /// Set the text alignment.
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.level.is_none()
            && self.caption.is_none()
            && self.font_size.is_none()
            && self.text_align.is_none()
    }
}

/// Flat wire shape of an element.
#[derive(Serialize, Deserialize)]
struct RawElement {
    #[serde(default = "ElementId::generate")]
    id: ElementId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(default)]
    styles: Styles,
}

/// Malformed fields degrade instead of failing the whole document: a missing
/// image source becomes empty and heading levels are clamped to 1-6.
impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let body = match raw.kind.as_str() {
            "paragraph" => ElementBody::Paragraph {
                content: raw.content.unwrap_or_default(),
            },
            "heading" => ElementBody::Heading {
                level: raw.level.unwrap_or(2).clamp(1, 6) as u8,
                content: raw.content.unwrap_or_default(),
            },
            "image" => ElementBody::Image {
                src: raw.src.unwrap_or_default(),
                alt: raw.alt.unwrap_or_default(),
                caption: raw.caption.unwrap_or_default(),
            },
            "blockquote" => ElementBody::Blockquote {
                content: raw.content.unwrap_or_default(),
            },
            _ => ElementBody::Generic {
                kind: raw.kind,
                content: raw.content.unwrap_or_default(),
            },
        };

        Element {
            id: raw.id,
            body,
            styles: raw.styles,
        }
    }
}

impl From<Element> for RawElement {
    fn from(element: Element) -> Self {
        let mut raw = RawElement {
            id: element.id,
            kind: String::new(),
            content: None,
            level: None,
            src: None,
            alt: None,
            caption: None,
            styles: element.styles,
        };

        match element.body {
            ElementBody::Paragraph { content } => {
                raw.kind = "paragraph".to_string();
                raw.content = Some(content);
            }
            ElementBody::Heading { level, content } => {
                raw.kind = "heading".to_string();
                raw.level = Some(i64::from(level));
                raw.content = Some(content);
            }
            ElementBody::Image { src, alt, caption } => {
                raw.kind = "image".to_string();
                raw.src = Some(src);
                raw.alt = Some(alt);
                raw.caption = Some(caption);
            }
            ElementBody::Blockquote { content } => {
                raw.kind = "blockquote".to_string();
                raw.content = Some(content);
            }
            ElementBody::Generic { kind, content } => {
                raw.kind = kind;
                raw.content = Some(content);
            }
        }

        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(Element::heading(0, "x").heading_level(), Some(1));
        assert_eq!(Element::heading(9, "x").heading_level(), Some(6));
    }

    #[test]
    fn test_element_wire_shape() {
        let el = Element::heading(2, "Title")
            .with_id("el_1")
            .with_style("fontWeight", "bold");
        let json = serde_json::to_value(&el).unwrap();

        assert_eq!(json["id"], "el_1");
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);
        assert_eq!(json["content"], "Title");
        assert_eq!(json["styles"]["fontWeight"], "bold");
        assert!(json.get("src").is_none());
    }

    #[test]
    fn test_unknown_type_becomes_generic() {
        let json = r#"{"id":"el_9","type":"callout","content":"Note"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.kind(), "callout");
        assert_eq!(el.content(), Some("Note"));
        assert!(el.styles.is_empty());
    }

    #[test]
    fn test_out_of_range_heading_level_clamped() {
        let json = r#"{"id":"el_2","type":"heading","level":9,"content":"x"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.heading_level(), Some(6));

        let json = r#"{"id":"el_2","type":"heading","level":-3,"content":"x"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.heading_level(), Some(1));

        let json = r#"{"id":"el_2","type":"heading","level":300,"content":"x"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.heading_level(), Some(6));
    }

    #[test]
    fn test_image_without_src_loads_empty() {
        let json = r#"{"id":"el_3","type":"image","alt":"a"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        match &el.body {
            ElementBody::Image { src, alt, .. } => {
                assert_eq!(src, "");
                assert_eq!(alt, "a");
            }
            other => panic!("expected image, got {:?}", other),
        }
        assert!(crate::render::markup::element_html(&el).contains("<img src=\"\""));
    }

    #[test]
    fn test_patch_ignores_inapplicable_fields() {
        let mut para = Element::paragraph("Hello");
        para.apply_patch(&ElementPatch::new().with_level(3).with_caption("cap"));
        assert_eq!(para.heading_level(), None);
        assert_eq!(para.caption(), None);
        assert_eq!(para.content(), Some("Hello"));
    }

    #[test]
    fn test_patch_empty_font_size_is_kept() {
        let mut para = Element::paragraph("Hello").with_style(FONT_SIZE, "14px");
        para.apply_patch(&ElementPatch::new().with_font_size("  "));
        assert_eq!(para.styles.font_size(), Some("14px"));
    }

    #[test]
    fn test_patch_image_caption() {
        let mut img = Element::image("data:image/png;base64,AAAA", "photo.png");
        img.apply_patch(&ElementPatch::new().with_caption("Figure 1").with_content("ignored"));
        assert_eq!(img.caption(), Some("Figure 1"));
        assert_eq!(img.content(), None);
    }
}
