//! Domain logic modules for the saga viewer.
//!
//! - Canvas operations (content-to-screen transform, row geometry, scroll range)

pub mod canvas_operations;
