//! Asynchronous cast loading state.

/// Holds the state of an async cast loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` to allow safe sharing between
/// the main thread and background loading thread.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True if a loading operation is currently in progress
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }
}
