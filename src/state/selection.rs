//! Selection and hover state management.

/// State related to user selection and hover.
///
/// Responsibilities:
/// - Tracking the selected character (drives the detail panel)
/// - Tracking the hovered character (drives connector highlighting)
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently selected character id
    selected_id: Option<String>,
    /// Character whose row is under the pointer
    hovered_id: Option<String>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears selection and hover.
    pub fn clear(&mut self) {
        self.selected_id = None;
        self.hovered_id = None;
    }

    // ===== Selection Queries =====

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    // ===== Selection Mutations =====

    /// Selects a character. Selecting the selected character keeps it selected.
    pub fn select(&mut self, id: &str) {
        if !self.is_selected(id) {
            self.selected_id = Some(id.to_string());
        }
    }

    /// Closes the detail panel.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn set_hovered(&mut self, id: Option<&str>) {
        if self.hovered_id.as_deref() != id {
            self.hovered_id = id.map(str::to_string);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_close() {
        let mut selection = SelectionState::new();
        selection.select("2");
        selection.select("2");
        assert_eq!(selection.selected_id(), Some("2"));
        selection.clear_selection();
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn test_hover_independent_of_selection() {
        let mut selection = SelectionState::new();
        selection.select("1");
        selection.set_hovered(Some("3"));
        assert_eq!(selection.hovered_id(), Some("3"));
        selection.set_hovered(None);
        assert_eq!(selection.selected_id(), Some("1"));
        assert_eq!(selection.hovered_id(), None);
    }
}
