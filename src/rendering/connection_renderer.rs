//! Connector curve rendering.

use eframe::egui;
use egui::epaint::CubicBezierShape;
use egui::{pos2, Color32, Shape, Stroke};
use rsaga::connections::curve_control_points;
use rsaga::{with_opacity, Connector, ThemeColors};

use crate::domain::canvas_operations::{percent_to_content_x, row_center_y, SceneTransform};
use crate::presentation::color_mapping::connection_color;

const CONNECTOR_WIDTH: f32 = 2.0;

/// Draws every connector as a cubic curve between first appearances.
///
/// Connectors touching `hovered_id` are drawn at full opacity, the rest dimmed.
pub fn render_connectors(
    painter: &egui::Painter,
    transform: &SceneTransform,
    connectors: &[Connector<'_>],
    hovered_id: Option<&str>,
    theme_colors: &ThemeColors,
) {
    let width = transform.scale(CONNECTOR_WIDTH);

    for connector in connectors {
        let source = (percent_to_content_x(connector.source_x), row_center_y(connector.source_row));
        let target = (percent_to_content_x(connector.target_x), row_center_y(connector.target_row));
        let points = curve_control_points(source, target).map(|(x, y)| transform.to_screen(pos2(x, y)));

        let color = with_opacity(
            connection_color(connector.color, theme_colors),
            connector.opacity(hovered_id),
        );

        painter.add(Shape::CubicBezier(CubicBezierShape::from_points_stroke(
            points,
            false,
            Color32::TRANSPARENT,
            Stroke::new(width, color),
        )));
    }
}
