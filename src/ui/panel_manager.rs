//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, timeline, details, status) and manages
//! their layout, resizing, and interaction coordination.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{details_panel, header, status_bar, timeline_panel};
use crate::presentation::color_mapping;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the built-in cast
    BuiltinCastRequested,
    /// User requested a freshly generated cast
    RandomCastRequested,
    /// A character marker was clicked
    CharacterClicked { character_id: String },
    /// The details panel close button was clicked
    CloseDetailsRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let theme_colors = color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name()).clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::BuiltinCastRequested => {
                        PanelInteraction::BuiltinCastRequested
                    }
                    header::HeaderInteraction::RandomCastRequested => {
                        PanelInteraction::RandomCastRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Details panel on the right, only while a character is selected
        if state.selection.selected_id().is_some() {
            let details_frame = egui::Frame::default()
                .inner_margin(egui::Margin::same(8))
                .fill(theme_colors.panel_background);

            let panel_response = egui::SidePanel::right("details_panel")
                .default_width(state.layout.details_width())
                .resizable(true)
                .frame(details_frame)
                .show(ctx, |ui| {
                    details_panel::render_details_panel(ui, state, &theme_colors)
                });

            state.layout.set_details_width(panel_response.response.rect.width());

            if let Some(details_panel::DetailsInteraction::CloseRequested) = panel_response.inner {
                interaction = Some(PanelInteraction::CloseDetailsRequested);
            }
        }

        // Central panel: Timeline
        let timeline_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .fill(theme_colors.background);

        egui::CentralPanel::default()
            .frame(timeline_frame)
            .show(ctx, |ui| {
                if let Some(timeline_interaction) = timeline_panel::render_timeline_panel(
                    ui,
                    ctx,
                    state,
                    loader,
                    &theme_colors,
                ) {
                    interaction = Some(match timeline_interaction {
                        timeline_panel::TimelinePanelInteraction::CharacterClicked { character_id } => {
                            PanelInteraction::CharacterClicked { character_id }
                        }
                    });
                }
            });

        interaction
    }
}
