//! Utility modules for the saga viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_year, get_current_memory_mb, format_memory_mb};
