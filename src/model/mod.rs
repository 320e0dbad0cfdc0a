//! Document model types for the page editor.
//!
//! A [`Document`] owns an ordered list of [`Page`]s, each of which owns an
//! ordered list of [`Element`]s. Element style overrides are free-form
//! [`Styles`] maps; document-wide styling comes from a [`TemplateStyles`]
//! preset. The model serializes to the same camelCase JSON layout the
//! editor backend stores on disk.

mod document;
mod element;
mod page;
mod styles;
mod template;

pub use document::{Document, Metadata, Outline, OutlineItem, DEFAULT_TITLE};
pub use element::{Element, ElementBody, ElementId, ElementPatch};
pub use page::Page;
pub use styles::{Styles, TextAlign, FONT_SIZE, TEXT_ALIGN};
pub use template::{Colors, FontSpec, Fonts, Margins, PageSize, Template, TemplateStyles};

use uuid::Uuid;

/// Generate a process-unique identifier such as `el_3f9c2a1b7d04`.
pub(crate) fn generate_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &hex[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_prefix_and_uniqueness() {
        let a = generate_id("el");
        let b = generate_id("el");
        assert!(a.starts_with("el_"));
        assert_eq!(a.len(), "el_".len() + 12);
        assert_ne!(a, b);
    }
}
