//! Rendering subsystem for drawing the timeline scene
//!
//! This module contains all painting logic for the saga viewer:
//! - Character rows and markers (avatar tile, name, selection ring)
//! - Connectors (cubic curves between first appearances)
//! - Axis (section dividers and year labels)
//! - Text utilities (text measurement and truncation)

pub mod timeline_renderer;
pub mod connection_renderer;
pub mod axis_renderer;
pub mod text_utils;
