//! Canvas geometry for the timeline scene.
//!
//! The scene is laid out in unscaled *content* coordinates: a fixed-width
//! canvas with one row per character. Horizontal scrolling shifts content
//! left, then the whole scene is scaled about the centre of the visible view
//! by the zoom level.
//!
//! These functions are stateless and can be tested independently.

use egui::{pos2, Pos2, Rect};

/// Width of the scrollable canvas in content pixels.
pub const CANVAS_WIDTH: f32 = 2000.0;
/// Padding around the rows.
pub const CANVAS_PADDING: f32 = 32.0;
/// Height of one character row.
pub const ROW_HEIGHT: f32 = 120.0;
/// Vertical gap between rows.
pub const ROW_GAP: f32 = 16.0;
/// Distance between the tops of consecutive rows.
pub const ROW_PITCH: f32 = ROW_HEIGHT + ROW_GAP;
/// Strip at the bottom of the canvas holding the year labels.
pub const YEAR_LABEL_HEIGHT: f32 = 48.0;
/// Side of the square avatar tile of a marker.
pub const MARKER_SIZE: f32 = 48.0;

/// Converts a layout percentage to a content x coordinate.
pub fn percent_to_content_x(percent: f32) -> f32 {
    percent / 100.0 * CANVAS_WIDTH
}

/// Content y coordinate of the top of row `row`.
pub fn row_top_y(row: usize) -> f32 {
    CANVAS_PADDING + row as f32 * ROW_PITCH
}

/// Content y coordinate of the vertical centre of row `row`.
pub fn row_center_y(row: usize) -> f32 {
    row_top_y(row) + ROW_HEIGHT / 2.0
}

/// Total content height for `rows` rows, never shorter than the view.
pub fn content_height(rows: usize, view_height: f32) -> f32 {
    let rows_extent = row_top_y(rows) + CANVAS_PADDING + YEAR_LABEL_HEIGHT;
    rows_extent.max(view_height)
}

/// Largest horizontal scroll offset for a view of the given width.
pub fn max_scroll(view_width: f32) -> f32 {
    (CANVAS_WIDTH - view_width).max(0.0)
}

/// Maps content coordinates to screen coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SceneTransform {
    view: Rect,
    scroll_x: f32,
    zoom: f32,
}

impl SceneTransform {
    /// # Arguments
    /// * `view` - Screen rectangle the canvas is shown in
    /// * `scroll_x` - Horizontal scroll offset in content pixels
    /// * `zoom` - Uniform scale about the view centre
    pub fn new(view: Rect, scroll_x: f32, zoom: f32) -> Self {
        Self { view, scroll_x, zoom }
    }

    /// Screen position of a content point.
    pub fn to_screen(&self, content: Pos2) -> Pos2 {
        let unscaled = pos2(
            self.view.left() + content.x - self.scroll_x,
            self.view.top() + content.y,
        );
        let center = self.view.center();
        center + (unscaled - center) * self.zoom
    }

    /// Screen position of a layout percentage on a given content row height.
    pub fn percent_to_screen(&self, percent: f32, content_y: f32) -> Pos2 {
        self.to_screen(pos2(percent_to_content_x(percent), content_y))
    }

    /// Scales a content length to screen pixels.
    pub fn scale(&self, length: f32) -> f32 {
        length * self.zoom
    }

    /// Screen rectangle of a content rectangle.
    pub fn rect_to_screen(&self, content: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(content.min), self.to_screen(content.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_identity_at_unit_zoom() {
        let t = SceneTransform::new(view(), 0.0, 1.0);
        assert_eq!(t.to_screen(pos2(0.0, 0.0)), pos2(100.0, 50.0));
        assert_eq!(t.to_screen(pos2(10.0, 20.0)), pos2(110.0, 70.0));
    }

    #[test]
    fn test_scroll_shifts_left() {
        let t = SceneTransform::new(view(), 300.0, 1.0);
        assert_eq!(t.to_screen(pos2(300.0, 0.0)).x, 100.0);
    }

    #[test]
    fn test_zoom_about_view_center() {
        let t = SceneTransform::new(view(), 0.0, 2.0);
        // view centre is content (400, 300)
        assert_eq!(t.to_screen(pos2(400.0, 300.0)), pos2(500.0, 350.0));
        assert_eq!(t.to_screen(pos2(500.0, 300.0)), pos2(700.0, 350.0));
        assert_eq!(t.scale(48.0), 96.0);
    }

    #[test]
    fn test_percent_mapping() {
        assert_eq!(percent_to_content_x(5.0), 100.0);
        assert_eq!(percent_to_content_x(95.0), 1900.0);
        let t = SceneTransform::new(view(), 0.0, 1.0);
        assert_eq!(t.percent_to_screen(50.0, 0.0), pos2(1100.0, 50.0));
    }

    #[test]
    fn test_row_geometry() {
        assert_eq!(row_center_y(0), CANVAS_PADDING + 60.0);
        assert_eq!(row_center_y(2) - row_center_y(1), ROW_PITCH);
        assert_eq!(content_height(0, 900.0), 900.0);
        assert!(content_height(10, 100.0) > row_top_y(10));
    }

    #[test]
    fn test_max_scroll() {
        assert_eq!(max_scroll(800.0), 1200.0);
        assert_eq!(max_scroll(2500.0), 0.0);
    }
}
