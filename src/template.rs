//! Template catalog and template sources.
//!
//! The editor loads its templates once at start-up from a [`TemplateSource`]
//! and keeps them in a [`TemplateCatalog`]. A failing source never aborts the
//! session: [`TemplateCatalog::load`] logs the failure and falls back to an
//! empty catalog.

use crate::error::{Error, Result};
use crate::model::{Colors, FontSpec, Fonts, Margins, PageSize, Template, TemplateStyles};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "kindle-standard";

/// Wire shape of a template listing: `{ "templates": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateList {
    /// Success flag sent by some backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// Available templates
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// Parse a template listing from JSON.
pub fn parse_template_list(json: &str) -> Result<Vec<Template>> {
    let list: TemplateList = serde_json::from_str(json)?;
    if list.success == Some(false) {
        return Err(Error::Template("template source reported failure".into()));
    }
    Ok(list.templates)
}

/// Source of layout templates.
pub trait TemplateSource {
    /// Fetch all available templates.
    fn load_templates(&self) -> Result<Vec<Template>>;
}

/// Source serving the built-in templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateSource for BuiltinTemplates {
    fn load_templates(&self) -> Result<Vec<Template>> {
        Ok(builtin_templates())
    }
}

/// Source reading a `{ "templates": [...] }` JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileTemplates {
    path: PathBuf,
}

impl JsonFileTemplates {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateSource for JsonFileTemplates {
    fn load_templates(&self) -> Result<Vec<Template>> {
        let json = fs::read_to_string(&self.path)?;
        parse_template_list(&json)
    }
}

/// Source serving a fixed list, e.g. templates fetched elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplates(pub Vec<Template>);

impl TemplateSource for StaticTemplates {
    fn load_templates(&self) -> Result<Vec<Template>> {
        Ok(self.0.clone())
    }
}

/// Templates cached for an editor session.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Create a catalog from a list of templates.
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Catalog holding the built-in templates.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    /// Load from a source, degrading to an empty catalog on failure.
    pub fn load(source: &dyn TemplateSource) -> Self {
        match source.load_templates() {
            Ok(templates) => {
                log::debug!("Loaded {} templates", templates.len());
                Self::new(templates)
            }
            Err(e) => {
                log::warn!("Failed to load templates: {}", e);
                Self::default()
            }
        }
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Styles of a template, or empty styles when the id is unknown.
    pub fn styles_for(&self, id: &str) -> TemplateStyles {
        self.get(id).map(|t| t.styles.clone()).unwrap_or_default()
    }

    /// Iterate templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The three templates shipped with the editor backend.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "kindle-standard",
            "Kindle Standard",
            TemplateStyles {
                page_size: Some(page_size("6in", "9in")),
                margins: Some(Margins::symmetric("0.75in", "0.5in")),
                fonts: Some(Fonts {
                    heading: Some(FontSpec::new("Georgia", "18pt").with_weight("bold")),
                    body: Some(FontSpec::new("Georgia", "11pt").with_line_height("1.4")),
                    caption: Some(FontSpec::new("Arial", "9pt").with_style("italic")),
                }),
                colors: Some(Colors::new("#000000", "#2c3e50", "#3498db")),
            },
        )
        .with_description("Standard Kindle-compatible layout"),
        Template::new(
            "modern-ebook",
            "Modern E-book",
            TemplateStyles {
                page_size: Some(page_size("6in", "9in")),
                margins: Some(Margins::symmetric("1in", "0.75in")),
                fonts: Some(Fonts {
                    heading: Some(FontSpec::new("Montserrat", "20pt").with_weight("600")),
                    body: Some(FontSpec::new("Open Sans", "11pt").with_line_height("1.5")),
                    caption: Some(FontSpec::new("Open Sans", "9pt").with_style("italic")),
                }),
                colors: Some(Colors::new("#333333", "#1a1a1a", "#e74c3c")),
            },
        )
        .with_description("Contemporary design for e-books"),
        Template::new(
            "academic",
            "Academic",
            TemplateStyles {
                page_size: Some(page_size("8.5in", "11in")),
                margins: Some(Margins::symmetric("1in", "1in")),
                fonts: Some(Fonts {
                    heading: Some(FontSpec::new("Times New Roman", "16pt").with_weight("bold")),
                    body: Some(FontSpec::new("Times New Roman", "12pt").with_line_height("1.6")),
                    caption: Some(FontSpec::new("Arial", "10pt").with_style("italic")),
                }),
                colors: Some(Colors::new("#000000", "#000000", "#0066cc")),
            },
        )
        .with_description("Formal layout for educational content"),
    ]
}

fn page_size(width: &str, height: &str) -> PageSize {
    PageSize {
        width: width.to_string(),
        height: height.to_string(),
    }
}
