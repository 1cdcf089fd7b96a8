//! Header panel UI rendering
//!
//! Handles the top bar with dataset controls, name search, zoom buttons and
//! the theme selector.

use eframe::egui;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a dataset file
    OpenFileRequested(PathBuf),
    /// User clicked "Built-in Cast"
    BuiltinCastRequested,
    /// User clicked "Random Cast"
    RandomCastRequested,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Saga Timeline");
        ui.separator();

        if ui.button("📁 Open Cast").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Cast Files", &["json", "br"])
                .add_filter("JSON", &["json"])
                .add_filter("Brotli-compressed JSON", &["br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("📜 Built-in Cast").clicked() {
            interaction = Some(HeaderInteraction::BuiltinCastRequested);
        }

        if ui.button("🎲 Random Cast").clicked() {
            interaction = Some(HeaderInteraction::RandomCastRequested);
        }

        ui.separator();

        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(state.layout.search_query_mut())
                .hint_text("Search characters...")
                .desired_width(180.0),
        );
        if !state.layout.search_query().is_empty() && ui.small_button("✕").clicked() {
            state.layout.clear_search();
        }

        ui.separator();

        // Zoom controls
        if ui.button("➖").on_hover_text("Zoom out").clicked() {
            state.viewport.zoom_out();
        }
        ui.label(format!("{}%", state.viewport.zoom().percent()));
        if ui.button("➕").on_hover_text("Zoom in").clicked() {
            state.viewport.zoom_in();
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name
                        );
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(ui.visuals().error_fg_color, err);
    }

    interaction
}
