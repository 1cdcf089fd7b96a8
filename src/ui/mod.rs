//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the saga viewer:
//! - Header panel (dataset controls, search, zoom, theme selector)
//! - Timeline panel (scrollable, zoomable character canvas)
//! - Details panel (selected character's story, events and connections)
//! - Status bar (cast statistics and memory usage)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pan and zoom)

pub mod header;
pub mod timeline_panel;
pub mod details_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
