//! Memoized timeline layout.

use rsaga::{Cast, TimelineLayout};

/// Cache for the year layout of the current cast.
///
/// The layout depends only on the full cast (never on the search filter), so
/// it is recomputed only when the cast generation changes.
#[derive(Debug, Default)]
pub struct LayoutCache {
    layout: TimelineLayout,
    /// Cast generation the layout was computed for
    generation: Option<u64>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for `cast`, recomputing it if `generation` changed.
    pub fn get_or_compute(&mut self, cast: &Cast, generation: u64) -> &TimelineLayout {
        if self.generation != Some(generation) {
            self.layout = TimelineLayout::compute(cast.characters());
            self.generation = Some(generation);
            tracing::debug!(
                generation,
                sections = self.layout.sections().len(),
                "Recomputed timeline layout"
            );
        }
        &self.layout
    }

    /// Last computed layout (may be stale until the next `get_or_compute`).
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    /// Forces recomputation on next access.
    pub fn invalidate(&mut self) {
        self.generation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsaga::builtin_cast;

    #[test]
    fn test_recomputes_on_generation_change() {
        let mut cache = LayoutCache::new();
        let cast = builtin_cast();
        assert_eq!(cache.get_or_compute(&cast, 0).sections().len(), 4);

        let empty = Cast::default();
        // same generation: stale layout is kept
        assert_eq!(cache.get_or_compute(&empty, 0).sections().len(), 4);
        assert!(cache.get_or_compute(&empty, 1).is_empty());

        cache.invalidate();
        assert_eq!(cache.get_or_compute(&cast, 1).sections().len(), 4);
    }
}
