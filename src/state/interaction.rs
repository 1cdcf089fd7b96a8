//! Mouse interaction state.

use rsaga::PanGesture;

/// State related to ongoing mouse interactions.
///
/// Holds the drag-to-pan gesture so it survives between frames.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pan: PanGesture,
}

impl InteractionState {
    /// Creates a new interaction state with no active interactions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any gesture in progress.
    pub fn reset(&mut self) {
        self.pan.end();
    }

    /// Returns true if a drag operation is in progress.
    pub fn is_dragging(&self) -> bool {
        self.pan.is_active()
    }

    // ===== Low-Level Accessors (for input handlers) =====

    pub(crate) fn for_input_handler(&mut self) -> &mut PanGesture {
        &mut self.pan
    }
}
