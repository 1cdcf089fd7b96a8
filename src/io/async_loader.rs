//! Asynchronous cast file loading.
//!
//! Dataset files are parsed on a background thread so the GUI stays
//! responsive; the result comes back through a channel polled once per frame.

use eframe::egui;
use rsaga::{Cast, CastReader, GeneratedCastReader, GeneratorConfig, JsonCastReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use tracing::{info, warn};
use crate::io::LoadingState;

/// Result of a completed cast loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        cast: Cast,
        /// File the cast was read from
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No result available (still loading or nothing started)
    None,
}

/// Manages asynchronous loading of cast files.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Cast, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    fn lock_state(state: &Mutex<LoadingState>) -> MutexGuard<'_, LoadingState> {
        state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        Self::lock_state(&self.loading_state).in_progress
    }

    /// Path of the file being loaded, if any.
    pub fn pending_path(&self) -> Option<&Path> {
        self.pending_load_path.as_deref()
    }

    /// Starts loading a cast file asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the dataset (`.json` or `.json.br`)
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        Self::lock_state(&self.loading_state).in_progress = true;
        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        info!(path = %path.display(), "Loading cast");

        thread::spawn(move || {
            let result = JsonCastReader::new()
                .read(&path)
                .map_err(|e| e.to_string());

            Self::lock_state(&loading_state).in_progress = false;

            let _ = sender.send(result);

            ctx_handle.request_repaint();
        });
    }

    /// Generates a random cast in-memory.
    ///
    /// The cast is generated synchronously (no background thread).
    pub fn load_generated_cast(&mut self, seed: u64) -> Result<Cast, String> {
        let reader = GeneratedCastReader::new(GeneratorConfig { seed, ..GeneratorConfig::default() });
        reader.read(Path::new("")).map_err(|e| e.to_string())
    }

    /// Checks if background loading has completed and returns the result if available.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take().unwrap_or_default();

        match result {
            Ok(cast) => LoadResult::Success { cast, path },
            Err(error_msg) => {
                warn!(path = %path.display(), error = %error_msg, "Cast load failed");
                LoadResult::Error(error_msg)
            }
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for_result(loader: &mut AsyncLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            match loader.check_completion() {
                LoadResult::None if Instant::now() < deadline => thread::sleep(Duration::from_millis(5)),
                other => return other,
            }
        }
    }

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
        assert!(loader.pending_path().is_none());
    }

    #[test]
    fn test_generated_cast_loading() {
        let mut loader = AsyncLoader::new();
        let cast = loader.load_generated_cast(5).expect("generated cast should load");
        assert_eq!(cast.len(), GeneratorConfig::default().characters);
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_file_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cast.json");
        std::fs::write(&path, r#"[{"id": "a", "name": "Alpha", "timelinePoints": [{"year": 3, "event": "x"}]}]"#).unwrap();

        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_file_load(path.clone(), &ctx);

        match wait_for_result(&mut loader) {
            LoadResult::Success { cast, path: loaded } => {
                assert_eq!(cast.len(), 1);
                assert_eq!(loaded, path);
            }
            _ => panic!("expected successful load"),
        }
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_file_load(PathBuf::from("/no/such/cast.json"), &ctx);
        assert!(matches!(wait_for_result(&mut loader), LoadResult::Error(_)));
    }
}
