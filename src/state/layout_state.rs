//! UI layout state management.
//!
//! This module encapsulates state related to UI layout and the header inputs.

pub const DEFAULT_DETAILS_WIDTH: f32 = 384.0;
pub const MIN_DETAILS_WIDTH: f32 = 240.0;
pub const MAX_DETAILS_WIDTH: f32 = 720.0;

/// State related to UI layout and header inputs.
///
/// Responsibilities:
/// - Tracking the detail panel width (persisted)
/// - Holding the character search text
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Width of the character detail side panel
    details_width: f32,
    /// Name filter typed in the header
    search_query: String,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self::with_details_width(DEFAULT_DETAILS_WIDTH)
    }

    /// Creates a layout state with a stored detail panel width.
    pub fn with_details_width(details_width: f32) -> Self {
        let mut state = Self {
            details_width: DEFAULT_DETAILS_WIDTH,
            search_query: String::new(),
        };
        state.set_details_width(details_width);
        state
    }

    pub fn details_width(&self) -> f32 {
        self.details_width
    }

    pub fn set_details_width(&mut self, width: f32) {
        if width.is_finite() {
            self.details_width = width.clamp(MIN_DETAILS_WIDTH, MAX_DETAILS_WIDTH);
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Mutable access to the search text buffer (for the header text field).
    pub fn search_query_mut(&mut self) -> &mut String {
        &mut self.search_query
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_width_clamped() {
        assert_eq!(LayoutState::with_details_width(10.0).details_width(), MIN_DETAILS_WIDTH);
        assert_eq!(LayoutState::with_details_width(f32::NAN).details_width(), DEFAULT_DETAILS_WIDTH);
        assert_eq!(LayoutState::with_details_width(400.0).details_width(), 400.0);
    }
}
