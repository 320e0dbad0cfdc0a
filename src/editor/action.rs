//! Toolbar and canvas actions.

use crate::image::ImageInput;
use crate::model::ElementId;

/// Something the user asked the editor to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Start a fresh document
    NewDocument,
    /// Append a page and switch to it
    AddPage,
    /// Add a paragraph to the current page
    AddText,
    /// Add a heading to the current page
    AddHeading,
    /// Add a blockquote to the current page
    AddBlockquote,
    /// Add a picked image to the current page
    AddImage(ImageInput),
    /// Show another page
    SwitchPage(usize),
    /// Select an element on the current page
    Select(ElementId),
    /// Remove an element from the current page
    Delete(ElementId),
    /// Commit the properties panel
    ApplyProperties,
    /// Switch the document to another template
    ChangeTemplate(String),
    /// Toggle between editing and preview
    TogglePreview,
}

impl EditorAction {
    /// Action for a toolbar button's `data-action` name.
    pub fn from_toolbar(name: &str) -> Option<Self> {
        match name {
            "new-document" => Some(EditorAction::NewDocument),
            "add-page" => Some(EditorAction::AddPage),
            "add-text" => Some(EditorAction::AddText),
            "add-heading" => Some(EditorAction::AddHeading),
            "add-quote" => Some(EditorAction::AddBlockquote),
            "preview" => Some(EditorAction::TogglePreview),
            "apply-properties" => Some(EditorAction::ApplyProperties),
            _ => None,
        }
    }

    /// Action for a canvas control (`edit` or `delete`) on an element.
    pub fn from_control(name: &str, element_id: impl Into<ElementId>) -> Option<Self> {
        match name {
            "edit" => Some(EditorAction::Select(element_id.into())),
            "delete" => Some(EditorAction::Delete(element_id.into())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toolbar() {
        assert_eq!(
            EditorAction::from_toolbar("add-text"),
            Some(EditorAction::AddText)
        );
        assert_eq!(EditorAction::from_toolbar("export-kindle"), None);
    }

    #[test]
    fn test_from_control() {
        assert_eq!(
            EditorAction::from_control("delete", "el_1"),
            Some(EditorAction::Delete(ElementId::from("el_1")))
        );
        assert_eq!(EditorAction::from_control("drag", "el_1"), None);
    }
}
