//! Viewport scroll and zoom state management.
//!
//! The canvas scrolls horizontally in unscaled content pixels and the whole
//! scene is scaled about the centre of the visible canvas by the zoom level.

use rsaga::Zoom;

/// State related to the visible part of the canvas.
///
/// Responsibilities:
/// - Managing the zoom level (clamped by [`Zoom`])
/// - Tracking the horizontal scroll offset
/// - Keeping the scroll offset inside the scrollable range
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    zoom: Zoom,
    scroll_x: f32,
    /// Largest valid scroll offset for the current canvas size
    max_scroll_x: f32,
}

impl ViewportState {
    /// Creates a new viewport state at 100% zoom, scrolled to the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a viewport state with a stored zoom level.
    pub fn with_zoom(level: f32) -> Self {
        Self {
            zoom: Zoom::new(level),
            ..Self::default()
        }
    }

    /// Resets scroll (zoom is kept, it is a user preference).
    pub fn reset_scroll(&mut self) {
        self.scroll_x = 0.0;
    }

    // ===== Viewport Queries =====

    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom.level()
    }

    pub fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn max_scroll_x(&self) -> f32 {
        self.max_scroll_x
    }

    // ===== Viewport Mutations =====

    pub fn zoom_in(&mut self) -> bool {
        self.zoom.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom.zoom_out()
    }

    /// Updates the scrollable range (called every frame with the canvas size).
    pub fn set_max_scroll(&mut self, max_scroll_x: f32) {
        self.max_scroll_x = max_scroll_x.max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll_x);
    }


    // ===== Low-Level Accessors (for input handlers) =====

    /// Returns multiple mutable references for input handling (splits borrows).
    ///
    /// # Returns
    /// Tuple of (zoom, scroll_x)
    pub(crate) fn for_input_handler(&mut self) -> (&mut Zoom, &mut f32) {
        (&mut self.zoom, &mut self.scroll_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_range_is_empty() {
        let mut viewport = ViewportState::new();
        viewport.set_max_scroll(-50.0);
        assert_eq!(viewport.max_scroll_x(), 0.0);
        assert_eq!(viewport.scroll_x(), 0.0);
    }

    #[test]
    fn test_shrinking_range_pulls_scroll_back() {
        let mut viewport = ViewportState::new();
        viewport.set_max_scroll(500.0);
        *viewport.for_input_handler().1 = 400.0;
        viewport.set_max_scroll(100.0);
        assert_eq!(viewport.scroll_x(), 100.0);
    }

    #[test]
    fn test_stored_zoom_is_clamped() {
        assert_eq!(ViewportState::with_zoom(9.0).zoom_level(), 2.0);
        assert_eq!(ViewportState::with_zoom(1.3).zoom().percent(), 130);
    }
}
