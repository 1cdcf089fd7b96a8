//! Input handling subsystem for UI interactions.
//!
//! - Timeline input handling (drag to pan, wheel to zoom)

pub mod timeline_input_handler;
