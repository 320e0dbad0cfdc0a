//! Element selection state.

use crate::model::ElementId;

/// Which element, if any, the properties panel is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Unselected,
    /// An element on the current page is selected
    Selected(ElementId),
}

impl Selection {
    /// Id of the selected element.
    pub fn id(&self) -> Option<&ElementId> {
        match self {
            Selection::Selected(id) => Some(id),
            Selection::Unselected => None,
        }
    }

    /// Check if anything is selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    /// Check if the given element is the selection.
    pub fn is(&self, id: &ElementId) -> bool {
        self.id() == Some(id)
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        *self = Selection::Unselected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_states() {
        let mut selection = Selection::default();
        assert!(!selection.is_selected());
        assert_eq!(selection.id(), None);

        let id = ElementId::from("el_1");
        selection = Selection::Selected(id.clone());
        assert!(selection.is(&id));
        assert!(!selection.is(&ElementId::from("el_2")));

        selection.clear();
        assert_eq!(selection, Selection::Unselected);
    }
}
