//! Template style presets.

use serde::{Deserialize, Serialize};

/// A named style preset: page size, margins, fonts, and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Template identifier (e.g., "kindle-standard")
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Styles applied to a document using this template
    #[serde(default)]
    pub styles: TemplateStyles,
}

impl Template {
    /// Create a template.
    pub fn new(id: impl Into<String>, name: impl Into<String>, styles: TemplateStyles) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            styles,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Document-wide styles derived from a template.
///
/// Every section is optional: a document whose template is unknown carries
/// empty styles and projections fall back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateStyles {
    /// Page dimensions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,

    /// Page margins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,

    /// Font presets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Fonts>,

    /// Color presets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Colors>,
}

impl TemplateStyles {
    /// Check if no section is set.
    pub fn is_empty(&self) -> bool {
        self.page_size.is_none()
            && self.margins.is_none()
            && self.fonts.is_none()
            && self.colors.is_none()
    }

    /// Heading font, if set.
    pub fn heading_font(&self) -> Option<&FontSpec> {
        self.fonts.as_ref().and_then(|f| f.heading.as_ref())
    }

    /// Body font, if set.
    pub fn body_font(&self) -> Option<&FontSpec> {
        self.fonts.as_ref().and_then(|f| f.body.as_ref())
    }

    /// Caption font, if set.
    pub fn caption_font(&self) -> Option<&FontSpec> {
        self.fonts.as_ref().and_then(|f| f.caption.as_ref())
    }
}

/// Page dimensions as CSS lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    /// Width (e.g., "6in")
    pub width: String,
    /// Height (e.g., "9in")
    pub height: String,
}

/// Page margins as CSS lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Top margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    /// Left margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Right margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl Margins {
    /// Uniform vertical and horizontal margins.
    pub fn symmetric(vertical: &str, horizontal: &str) -> Self {
        Self {
            top: Some(vertical.to_string()),
            bottom: Some(vertical.to_string()),
            left: Some(horizontal.to_string()),
            right: Some(horizontal.to_string()),
        }
    }
}

/// Font presets for headings, body text, and captions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Heading font
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<FontSpec>,
    /// Body font
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FontSpec>,
    /// Caption font
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<FontSpec>,
}

/// A single font preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSpec {
    /// Font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Font size (e.g., "11pt")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Font weight (e.g., "bold", "600")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Line height (e.g., "1.4")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    /// Font style (e.g., "italic")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl FontSpec {
    /// Create a font preset with family and size.
    pub fn new(family: &str, size: &str) -> Self {
        Self {
            family: Some(family.to_string()),
            size: Some(size.to_string()),
            ..Default::default()
        }
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: &str) -> Self {
        self.weight = Some(weight.to_string());
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, line_height: &str) -> Self {
        self.line_height = Some(line_height.to_string());
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }
}

/// Color presets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    /// Body text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Heading color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    /// Accent color (quote borders, links)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Colors {
    /// Create a color preset.
    pub fn new(text: &str, heading: &str, accent: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            heading: Some(heading.to_string()),
            accent: Some(accent.to_string()),
        }
    }
}
