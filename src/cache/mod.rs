//! Caching modules for derived timeline data.

pub mod layout_cache;

pub use layout_cache::LayoutCache;
