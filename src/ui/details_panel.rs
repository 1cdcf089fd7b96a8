//! Details panel UI rendering
//!
//! Shows the selected character: avatar reference, name, story, every timeline
//! point and the connections whose target exists.

use eframe::egui;
use egui::{RichText, ScrollArea};
use rsaga::{resolved_connections, Character, ThemeColors};
use crate::app::AppState;
use crate::presentation::color_mapping::relationship_color;

/// Result of user interaction with the details panel
pub enum DetailsInteraction {
    /// User clicked the close button
    CloseRequested,
}

/// Renders the details panel for the selected character
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `theme_colors` - Color palette for the current theme
pub fn render_details_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<DetailsInteraction> {
    let cast = state.cast.cast();
    let character = state.selection.selected_id().and_then(|id| cast.get(id))?;

    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading(RichText::new(&character.name).color(theme_colors.text_strong));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").on_hover_text("Close").clicked() {
                interaction = Some(DetailsInteraction::CloseRequested);
            }
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_character_body(ui, character, state, theme_colors);
        });

    interaction
}

fn render_character_body(ui: &mut egui::Ui, character: &Character, state: &AppState, theme_colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Avatar:").color(theme_colors.text_dim));
        ui.label(RichText::new(&character.avatar).monospace());
    });

    ui.add_space(8.0);
    ui.add(egui::Label::new(RichText::new(&character.story).color(theme_colors.text)).wrap());

    ui.add_space(12.0);
    ui.label(RichText::new("Timeline Events").strong().color(theme_colors.accent_strong));
    if character.timeline_points.is_empty() {
        ui.colored_label(theme_colors.text_dim, "(no events)");
    }
    for point in &character.timeline_points {
        egui::Frame::NONE
            .fill(theme_colors.hover)
            .stroke(egui::Stroke::new(1.0, theme_colors.border))
            .inner_margin(6.0)
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(format!("Year {}", point.year)).color(theme_colors.accent_strong));
                ui.label(point.event.as_str());
            });
        ui.add_space(4.0);
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Connections").strong().color(theme_colors.accent_strong));
    let connections = resolved_connections(character, state.cast.cast());
    if connections.is_empty() {
        ui.colored_label(theme_colors.text_dim, "(no connections)");
    }
    for (connection, target) in connections {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&target.name).strong());
            ui.label(RichText::new(&connection.relationship).color(relationship_color(connection, theme_colors)));
        });
    }
}
