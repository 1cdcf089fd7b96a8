//! Application-level coordination and workflow management.
//!
//! Handles cast loading, error reporting and character selection, keeping the
//! panels free of cross-cutting state updates.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use crate::state::CastSource;
use rsaga::builtin_cast;
use std::path::PathBuf;
use tracing::info;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous loading of a cast file.
    ///
    /// The current cast stays on screen until the new one arrives.
    pub fn open_file(state: &mut AppState, loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        state.error_message = None;
        state.interaction.reset();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { cast, path } => {
                state.cast.load_cast(cast, CastSource::File(path));
                state.reset_cast_view();
                true
            }
            LoadResult::Error(error_msg) => {
                // the previous cast stays visible
                state.error_message = Some(format!("Error loading cast: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Shows the built-in cast again.
    pub fn load_builtin_cast(state: &mut AppState) {
        state.cast.load_cast(builtin_cast(), CastSource::Builtin);
        state.reset_cast_view();
        info!("Showing built-in cast");
    }

    /// Generates and shows a random cast. Each request uses a new seed.
    pub fn open_random_cast(state: &mut AppState, loader: &mut AsyncLoader) {
        let seed = Self::next_seed(state);
        match loader.load_generated_cast(seed) {
            Ok(cast) => {
                info!(seed, characters = cast.len(), "Generated random cast");
                state.cast.load_cast(cast, CastSource::Generated { seed });
                state.reset_cast_view();
            }
            Err(e) => {
                state.error_message = Some(format!("Error generating cast: {}", e));
            }
        }
    }

    fn next_seed(state: &AppState) -> u64 {
        match state.cast.source() {
            CastSource::Generated { seed } => seed.wrapping_add(1),
            _ => 42 + state.cast.generation(),
        }
    }

    /// Handles a click on a character marker.
    ///
    /// Ids that are not in the current cast are ignored.
    pub fn handle_character_selected(state: &mut AppState, character_id: &str) {
        if state.cast.cast().get(character_id).is_some() {
            state.selection.select(character_id);
        }
    }

    /// Handles the detail panel close button.
    pub fn handle_close_details(state: &mut AppState) {
        state.selection.clear_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_close() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_character_selected(&mut state, "3");
        assert_eq!(state.selection.selected_id(), Some("3"));

        ApplicationCoordinator::handle_character_selected(&mut state, "missing");
        assert_eq!(state.selection.selected_id(), Some("3"));

        ApplicationCoordinator::handle_close_details(&mut state);
        assert_eq!(state.selection.selected_id(), None);
    }

    #[test]
    fn test_random_cast_replaces_builtin_and_clears_selection() {
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();
        state.selection.select("1");

        ApplicationCoordinator::open_random_cast(&mut state, &mut loader);
        let first_seed = match state.cast.source() {
            CastSource::Generated { seed } => *seed,
            other => panic!("unexpected source {:?}", other),
        };
        assert_eq!(state.selection.selected_id(), None);

        ApplicationCoordinator::open_random_cast(&mut state, &mut loader);
        assert_eq!(state.cast.source(), &CastSource::Generated { seed: first_seed + 1 });

        ApplicationCoordinator::load_builtin_cast(&mut state);
        assert_eq!(state.cast.source(), &CastSource::Builtin);
        assert_eq!(state.cast.cast().len(), 4);
    }
}
