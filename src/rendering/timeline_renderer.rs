//! Character row rendering logic
//!
//! Draws one row per character: a hover band across the canvas and one marker
//! per timeline point. A marker is an avatar tile with the character's
//! initials and the name underneath.

use eframe::egui;
use egui::{pos2, vec2, Align2, FontId, Rect, Stroke, StrokeKind};
use rsaga::{adjust_brightness, with_alpha, Character, ThemeColors, TimelineLayout};

use crate::domain::canvas_operations::{
    row_center_y, row_top_y, SceneTransform, CANVAS_WIDTH, MARKER_SIZE, ROW_HEIGHT,
};
use crate::rendering::text_utils::truncate_text_to_fit;

/// Scale of a selected character's markers.
const SELECTED_MARKER_SCALE: f32 = 1.25;
/// Widest a name label may get before it is truncated.
const NAME_LABEL_WIDTH: f32 = 120.0;
const NAME_FONT_SIZE: f32 = 12.0;

/// Result of user interaction with a character row
pub enum TimelineRowInteraction {
    /// A marker of the character was clicked
    CharacterClicked { character_id: String },
}

/// Per-row rendering flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowStyle {
    pub is_selected: bool,
    pub is_hovered: bool,
    pub is_dragging: bool,
}

/// Screen rectangle of row `row` across the whole canvas.
pub fn row_rect(transform: &SceneTransform, row: usize) -> Rect {
    transform.rect_to_screen(Rect::from_min_size(
        pos2(0.0, row_top_y(row)),
        vec2(CANVAS_WIDTH, ROW_HEIGHT),
    ))
}

/// Renders a single character row with its markers
///
/// # Arguments
/// * `ui` - The egui UI used for marker hit testing and tooltips
/// * `painter` - Painter clipped to the canvas
/// * `transform` - Content-to-screen mapping
/// * `character` - The character shown in this row
/// * `row` - Display row (index in the filtered list)
/// * `layout` - Year positions
/// * `style` - Selection, hover and drag flags
/// * `theme_colors` - Color palette for the current theme
///
/// # Returns
/// * `Option<TimelineRowInteraction>` - A click on one of the markers
#[allow(clippy::too_many_arguments)]
pub fn render_character_row(
    ui: &egui::Ui,
    painter: &egui::Painter,
    transform: &SceneTransform,
    character: &Character,
    row: usize,
    layout: &TimelineLayout,
    style: RowStyle,
    theme_colors: &ThemeColors,
) -> Option<TimelineRowInteraction> {
    if style.is_hovered {
        painter.rect_filled(row_rect(transform, row), transform.scale(8.0), with_alpha(theme_colors.hover, 96));
    }

    let scale = if style.is_selected { SELECTED_MARKER_SCALE } else { 1.0 };
    let tile_size = transform.scale(MARKER_SIZE * scale);
    let name_font = FontId::proportional(transform.scale(NAME_FONT_SIZE));
    let initials_font = FontId::proportional(tile_size * 0.35);
    let initials = character.initials();
    let name = truncate_text_to_fit(&character.name, transform.scale(NAME_LABEL_WIDTH), &name_font, painter);

    let mut interaction = None;

    for (index, point) in character.timeline_points.iter().enumerate() {
        let Some(percent) = layout.position(point.year) else {
            continue;
        };

        // tile sits above the row centre, the name below it
        let anchor = transform.percent_to_screen(percent, row_center_y(row) - 10.0);
        let tile_rect = Rect::from_center_size(anchor, vec2(tile_size, tile_size));

        if !painter.clip_rect().intersects(tile_rect.expand(transform.scale(NAME_LABEL_WIDTH))) {
            continue;
        }

        let corner = tile_size * 0.25;
        painter.rect_filled(tile_rect, corner, theme_colors.marker_fill);
        painter.rect_stroke(
            tile_rect,
            corner,
            Stroke::new(transform.scale(2.0), theme_colors.accent),
            StrokeKind::Inside,
        );
        if style.is_selected {
            painter.rect_stroke(
                tile_rect.expand(transform.scale(3.0)),
                corner,
                Stroke::new(transform.scale(3.0), adjust_brightness(theme_colors.accent_strong, 1.1)),
                StrokeKind::Outside,
            );
        }
        painter.text(tile_rect.center(), Align2::CENTER_CENTER, &initials, initials_font.clone(), theme_colors.text_strong);

        let name_pos = pos2(tile_rect.center().x, tile_rect.bottom() + transform.scale(4.0));
        let name_rect = painter.text(name_pos, Align2::CENTER_TOP, &name, name_font.clone(), theme_colors.text);

        // Hover sense only, so drags fall through to the canvas
        let marker_id = ui.id().with(("marker", &character.id, index));
        let marker_response = ui.interact(tile_rect.union(name_rect), marker_id, egui::Sense::hover());

        let pointer_clicked = ui.input(|i| i.pointer.primary_clicked());
        if marker_response.hovered() && pointer_clicked && !style.is_dragging {
            interaction = Some(TimelineRowInteraction::CharacterClicked {
                character_id: character.id.clone(),
            });
        }

        if !style.is_dragging {
            marker_response.on_hover_ui(|ui| {
                ui.label(egui::RichText::new(format!("Year {}", point.year)).strong());
                ui.label(point.event.as_str());
            });
        }
    }

    interaction
}
