//! State management modules for the saga viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Cast state (loaded characters and where they came from)
//! - Viewport state (horizontal scroll, zoom level)
//! - Selection state (selected and hovered characters)
//! - Interaction state (drag-to-pan gesture)
//! - Theme state (theme manager, current theme)
//! - Layout state (search text, panel width)

mod cast_state;
mod viewport;
mod selection;
mod interaction;
mod theme_state;
mod layout_state;

pub use cast_state::{CastState, CastSource};
pub use viewport::ViewportState;
pub use selection::SelectionState;
pub use interaction::InteractionState;
pub use theme_state::ThemeState;
pub use layout_state::{LayoutState, DEFAULT_DETAILS_WIDTH};
