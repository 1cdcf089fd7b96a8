//! Saga Timeline Viewer GUI Application
//!
//! Interactive viewer for character timelines built with egui. The viewer features:
//! - Horizontally scrollable canvas with characters placed by in-story year
//! - Drag-to-pan, wheel zoom, and name search
//! - Curved connectors between related characters, highlighted on hover
//! - Details panel for the selected character
//! - Asynchronous dataset loading with a loading indicator
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Canvas geometry (content-to-screen transform, rows)
//! - `presentation/` - Color mapping
//! - `cache/` - Memoized year layout
//! - `io/` - Background dataset loading and random casts
//! - `utils/` - Formatting helpers
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level painting of rows, connectors and axis
//! - `state/` - Focused state components

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod utils;
mod cache;
mod domain;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, ViewerSettings};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the saga viewer GUI.
fn main() -> eframe::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // Optional dataset to load on the first frame
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Saga Timeline"),
        ..Default::default()
    };

    eframe::run_native(
        "Saga Timeline",
        options,
        Box::new(move |cc| Ok(Box::new(SagaViewerApp::new(cc, initial_file)))),
    )
}

/// The main saga viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles cast loading, errors and selection
/// - `ThemeCoordinator` and `SettingsCoordinator` handle preferences
/// - `PanelManager` handles UI panel layout and rendering
struct SagaViewerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous file loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl SagaViewerApp {
    /// Creates a new viewer instance with preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let settings = SettingsCoordinator::load_viewer_settings(cc.storage);

        Self {
            state: AppState::with_preferences(theme_name, settings.details_width, settings.zoom_level),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    fn current_settings(&self) -> ViewerSettings {
        ViewerSettings {
            details_width: self.state.layout.details_width(),
            zoom_level: self.state.viewport.zoom_level(),
        }
    }

    fn persist_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_viewer_settings(storage, &self.current_settings());
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::BuiltinCastRequested => {
                ApplicationCoordinator::load_builtin_cast(&mut self.state);
            }
            PanelInteraction::RandomCastRequested => {
                ApplicationCoordinator::open_random_cast(&mut self.state, &mut self.loader);
            }
            PanelInteraction::CharacterClicked { character_id } => {
                ApplicationCoordinator::handle_character_selected(&mut self.state, &character_id);
            }
            PanelInteraction::CloseDetailsRequested => {
                ApplicationCoordinator::handle_close_details(&mut self.state);
            }
        }
    }
}

impl eframe::App for SagaViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist_preferences(storage);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Load initial file if specified via command line
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            self.persist_preferences(storage);
        }

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
