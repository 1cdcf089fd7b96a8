//! Centralized application state for the saga viewer.
//!
//! The state is composed of focused components that each manage one aspect
//! of the viewer, so panels can borrow the parts they need independently.

use crate::cache::LayoutCache;
use crate::state::{
    CastState, ViewportState, SelectionState,
    InteractionState, ThemeState, LayoutState
};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded characters and their source
    pub cast: CastState,

    /// Horizontal scroll and zoom
    pub viewport: ViewportState,

    /// Selected and hovered characters
    pub selection: SelectionState,

    /// Drag-to-pan gesture
    pub interaction: InteractionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state and search text
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Memoized year layout of the current cast
    pub layout_cache: LayoutCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state showing the built-in cast.
    pub fn new() -> Self {
        Self {
            cast: CastState::new(),
            viewport: ViewportState::new(),
            selection: SelectionState::new(),
            interaction: InteractionState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
            layout_cache: LayoutCache::new(),
        }
    }

    /// Creates a new AppState with preferences loaded from storage.
    pub fn with_preferences(theme_name: String, details_width: f32, zoom_level: f32) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::with_details_width(details_width),
            viewport: ViewportState::with_zoom(zoom_level),
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Clears everything tied to the previous cast after a new one is loaded.
    ///
    /// Zoom, theme, panel width and the search text are preferences and survive.
    pub fn reset_cast_view(&mut self) {
        self.viewport.reset_scroll();
        self.selection.clear();
        self.interaction.reset();
        self.error_message = None;
        self.layout_cache.invalidate();
    }
}
