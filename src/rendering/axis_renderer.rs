//! Section dividers and year labels.

use eframe::egui;
use egui::{Align2, FontId, Stroke};
use rsaga::{ThemeColors, TimelineLayout};

use crate::domain::canvas_operations::{SceneTransform, YEAR_LABEL_HEIGHT};
use crate::utils::format_year;

/// Draws a vertical divider at every section boundary.
///
/// Dividers span from the top of the scene down to the year label strip.
pub fn render_section_dividers(
    painter: &egui::Painter,
    transform: &SceneTransform,
    layout: &TimelineLayout,
    labels_top_y: f32,
    theme_colors: &ThemeColors,
) {
    let stroke = Stroke::new(transform.scale(2.0), theme_colors.divider);
    for percent in layout.divider_positions() {
        let top = transform.percent_to_screen(percent, 0.0);
        let bottom = transform.percent_to_screen(percent, labels_top_y);
        painter.line_segment([top, bottom], stroke);
    }
}

/// Draws one label per distinct year under the rows.
pub fn render_year_labels(
    painter: &egui::Painter,
    transform: &SceneTransform,
    layout: &TimelineLayout,
    labels_top_y: f32,
    theme_colors: &ThemeColors,
) {
    let font = FontId::proportional(transform.scale(14.0));
    let label_y = labels_top_y + YEAR_LABEL_HEIGHT / 2.0;

    for (year, percent) in layout.positions() {
        let anchor = transform.percent_to_screen(percent, label_y);
        if !painter.clip_rect().x_range().contains(anchor.x) {
            continue;
        }
        painter.text(
            anchor,
            Align2::CENTER_CENTER,
            format_year(year),
            font.clone(),
            theme_colors.year_label,
        );
    }
}
