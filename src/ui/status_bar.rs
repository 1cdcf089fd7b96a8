//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying cast statistics.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{get_current_memory_mb, format_memory_mb};

/// Renders the status panel at the bottom of the window with cast statistics
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let cast = state.cast.cast();
        let sections = state.layout_cache.layout().sections().len();
        ui.label(RichText::new(format!(
            "{} | Characters: {} | Events: {} | Connections: {} | Sections: {}",
            state.cast.source().label(),
            cast.len(),
            cast.total_events(),
            cast.total_connections(),
            sections,
        )).strong());

        let unresolved = cast.unresolved_connections();
        if unresolved > 0 {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Unresolved connections: {}", unresolved))
                .strong()
                .color(ui.visuals().warn_fg_color));
        }

        if state.interaction.is_dragging() {
            ui.label(RichText::new("|").strong());
            ui.label("Panning");
        }
    });
}
