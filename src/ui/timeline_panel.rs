//! Timeline panel UI rendering
//!
//! Handles the central canvas: character rows, connectors, section dividers
//! and year labels. The canvas pans horizontally by dragging, zooms with the
//! wheel and scrolls vertically through the scroll bar.

use crate::app::AppState;
use crate::domain::canvas_operations::{content_height, max_scroll, row_top_y, SceneTransform};
use crate::io::AsyncLoader;
use crate::rendering::timeline_renderer::{self, RowStyle, TimelineRowInteraction};
use crate::rendering::{axis_renderer, connection_renderer};
use crate::ui::input::timeline_input_handler::{self, TimelineInputResult};
use crate::utils::{get_current_memory_mb, format_memory_mb};
use egui::scroll_area::ScrollSource;
use egui::{vec2, Rect, ScrollArea};
use rsaga::{filter_by_name, resolve_connectors, ThemeColors};

/// Result of timeline panel interactions that need to be handled by the application.
pub enum TimelinePanelInteraction {
    /// A character marker was clicked
    CharacterClicked { character_id: String },
}

/// Renders the complete timeline panel.
pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
) -> Option<TimelinePanelInteraction> {
    if loader.is_loading() {
        render_loading_indicator(ui, theme_colors, loader);
        ctx.request_repaint_after(std::time::Duration::from_secs_f32(0.1));
        return None;
    }

    let view_rect = ui.available_rect_before_wrap();
    state.viewport.set_max_scroll(max_scroll(view_rect.width()));

    // Handle input (pan, zoom)
    let canvas_response = ui.interact(
        view_rect,
        ui.id().with("timeline_canvas"),
        egui::Sense::drag(),
    );
    let max_scroll_x = state.viewport.max_scroll_x();
    let (zoom, scroll_x) = state.viewport.for_input_handler();
    let pan = state.interaction.for_input_handler();
    let input_result = timeline_input_handler::handle_timeline_input(
        ctx,
        view_rect,
        &canvas_response,
        zoom,
        scroll_x,
        max_scroll_x,
        pan,
    );
    if matches!(input_result, TimelineInputResult::ViewportUpdated) {
        ctx.request_repaint();
    }

    let cast = state.cast.cast();
    let layout = state.layout_cache.get_or_compute(cast, state.cast.generation());

    if cast.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.colored_label(theme_colors.text_dim, "This cast has no characters");
        });
        return None;
    }

    let visible = filter_by_name(cast.characters(), state.layout.search_query());
    let connectors = resolve_connectors(cast, layout);

    let zoom_level = state.viewport.zoom_level();
    let scroll_x = state.viewport.scroll_x();
    let is_dragging = state.interaction.is_dragging();
    let hovered_id = state.selection.hovered_id();
    let pointer_pos = ctx
        .input(|i| i.pointer.hover_pos())
        .filter(|pos| view_rect.contains(*pos));

    let unscaled_height = content_height(visible.len(), view_rect.height() / zoom_level);

    let mut interaction: Option<TimelinePanelInteraction> = None;
    let mut new_hovered: Option<String> = None;

    ScrollArea::vertical()
        .id_salt("timeline_scroll_area")
        .scroll_source(ScrollSource::SCROLL_BAR)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (content_rect, _) = ui.allocate_exact_size(
                vec2(ui.available_width(), unscaled_height * zoom_level),
                egui::Sense::hover(),
            );
            // Scaling about this rect's centre keeps the scaled scene inside content_rect
            let scene_view = Rect::from_center_size(content_rect.center(), vec2(content_rect.width(), unscaled_height));
            let transform = SceneTransform::new(scene_view, scroll_x, zoom_level);
            let painter = ui.painter().with_clip_rect(ui.clip_rect().intersect(content_rect));

            painter.rect_filled(content_rect, 0.0, theme_colors.background);

            let labels_top_y = row_top_y(visible.len());
            axis_renderer::render_section_dividers(&painter, &transform, layout, labels_top_y, theme_colors);
            connection_renderer::render_connectors(&painter, &transform, &connectors, hovered_id, theme_colors);

            for (row, character) in visible.iter().enumerate() {
                let is_hovered = pointer_pos
                    .is_some_and(|pos| timeline_renderer::row_rect(&transform, row).contains(pos));
                if is_hovered {
                    new_hovered = Some(character.id.clone());
                }

                let style = RowStyle {
                    is_selected: state.selection.is_selected(&character.id),
                    is_hovered: hovered_id == Some(character.id.as_str()),
                    is_dragging,
                };

                if let Some(TimelineRowInteraction::CharacterClicked { character_id }) =
                    timeline_renderer::render_character_row(
                        ui,
                        &painter,
                        &transform,
                        character,
                        row,
                        layout,
                        style,
                        theme_colors,
                    )
                {
                    interaction = Some(TimelinePanelInteraction::CharacterClicked { character_id });
                }
            }

            axis_renderer::render_year_labels(&painter, &transform, layout, labels_top_y, theme_colors);
        });

    if new_hovered.as_deref() != state.selection.hovered_id() {
        state.selection.set_hovered(new_hovered.as_deref());
        ctx.request_repaint();
    }

    interaction
}

/// Renders a loading indicator while a cast file is being read.
fn render_loading_indicator(ui: &mut egui::Ui, theme_colors: &ThemeColors, loader: &AsyncLoader) {
    let canvas_rect = ui.available_rect_before_wrap();
    let center_pos = canvas_rect.center();

    let font = egui::FontId::proportional(48.0);
    let detail_font = egui::FontId::proportional(20.0);
    let color = theme_colors.text_dim;

    ui.painter().text(
        center_pos,
        egui::Align2::CENTER_CENTER,
        "Loading...",
        font,
        color,
    );

    let mut detail = format_memory_mb(get_current_memory_mb());
    if let Some(path) = loader.pending_path() {
        detail = format!("{}  {}", path.display(), detail);
    }

    ui.painter().text(
        egui::pos2(center_pos.x, center_pos.y + 60.0),
        egui::Align2::CENTER_CENTER,
        detail,
        detail_font,
        color,
    );
}
