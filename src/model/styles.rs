//! Element style overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Style key edited by the properties panel for font size.
pub const FONT_SIZE: &str = "fontSize";

/// Style key edited by the properties panel for text alignment.
pub const TEXT_ALIGN: &str = "textAlign";

/// Free-form map of CSS-like property names (camelCase, as in the DOM) to values.
///
/// No schema is enforced here; every key and value is accepted. Encoding for
/// output happens in [`crate::render::markup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles(BTreeMap<String, String>);

impl Styles {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Remove a property.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Check whether a property is set.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Font size override, if any.
    pub fn font_size(&self) -> Option<&str> {
        self.get(FONT_SIZE)
    }

    /// Text alignment override, if it parses as a known alignment.
    pub fn text_align(&self) -> Option<TextAlign> {
        self.get(TEXT_ALIGN).and_then(|v| v.parse().ok())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Styles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Text alignment choices offered by the properties panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl TextAlign {
    /// All alignments in panel order.
    pub const ALL: [TextAlign; 4] = [
        TextAlign::Left,
        TextAlign::Center,
        TextAlign::Right,
        TextAlign::Justify,
    ];

    /// CSS keyword for this alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TextAlign::Left => "Left",
            TextAlign::Center => "Center",
            TextAlign::Right => "Right",
            TextAlign::Justify => "Justified",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            "justify" => Ok(TextAlign::Justify),
            other => Err(format!("unknown text alignment: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_set_get() {
        let mut styles = Styles::new().with("fontSize", "14px");
        styles.set("fontWeight", "bold");

        assert_eq!(styles.get("fontSize"), Some("14px"));
        assert_eq!(styles.len(), 2);
        assert!(styles.contains("fontWeight"));
        assert_eq!(styles.remove("fontWeight"), Some("bold".to_string()));
        assert!(!styles.contains("fontWeight"));
    }

    #[test]
    fn test_styles_serialize_as_plain_object() {
        let styles: Styles = [("textAlign", "center")].into_iter().collect();
        let json = serde_json::to_string(&styles).unwrap();
        assert_eq!(json, r#"{"textAlign":"center"}"#);
    }

    #[test]
    fn test_text_align_parse() {
        assert_eq!("center".parse::<TextAlign>(), Ok(TextAlign::Center));
        assert_eq!(" Justify ".parse::<TextAlign>(), Ok(TextAlign::Justify));
        assert!("middle".parse::<TextAlign>().is_err());
    }

    #[test]
    fn test_styles_text_align_accessor() {
        let styles = Styles::new().with(TEXT_ALIGN, "right");
        assert_eq!(styles.text_align(), Some(TextAlign::Right));

        let odd = Styles::new().with(TEXT_ALIGN, "start");
        assert_eq!(odd.text_align(), None);
    }
}
