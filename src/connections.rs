//! Resolution of character connections into drawable connectors.
//!
//! A connector runs from a character's first timeline point to the target's
//! first timeline point. Rows come from the index in the full cast, so
//! connectors keep their geometry while the name filter hides rows.
//! Connections whose target does not exist are skipped.

use tracing::debug;
use crate::layout::TimelineLayout;
use crate::model::{Cast, Character, Connection};

/// Opacity of a connector touching the hovered character.
pub const HIGHLIGHT_OPACITY: f32 = 1.0;
/// Opacity of every other connector.
pub const DIM_OPACITY: f32 = 0.3;

/// A resolved connection ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector<'a> {
    pub source_id: &'a str,
    pub target_id: &'a str,
    pub relationship: &'a str,
    pub color: &'a str,
    /// Horizontal positions in percent of the canvas width
    pub source_x: f32,
    pub target_x: f32,
    /// Row indices in the full cast
    pub source_row: usize,
    pub target_row: usize,
}

impl Connector<'_> {
    /// Whether hovering `hovered_id` highlights this connector.
    pub fn touches(&self, hovered_id: &str) -> bool {
        self.source_id == hovered_id || self.target_id == hovered_id
    }

    pub fn opacity(&self, hovered_id: Option<&str>) -> f32 {
        match hovered_id {
            Some(id) if self.touches(id) => HIGHLIGHT_OPACITY,
            _ => DIM_OPACITY,
        }
    }
}

/// Builds every drawable connector of the cast, in cast order.
pub fn resolve_connectors<'a>(cast: &'a Cast, layout: &TimelineLayout) -> Vec<Connector<'a>> {
    let mut connectors = Vec::with_capacity(cast.total_connections());

    for (source_row, character) in cast.iter().enumerate() {
        let Some(source_year) = character.first_year() else {
            continue;
        };
        let Some(source_x) = layout.position(source_year) else {
            continue;
        };

        for connection in &character.connections {
            let Some(target_row) = cast.index_of(&connection.character_id) else {
                debug!(
                    source = %character.id,
                    target = %connection.character_id,
                    "Skipping connection to unknown character"
                );
                continue;
            };
            let target = &cast.characters()[target_row];
            let Some(target_x) = target.first_year().and_then(|year| layout.position(year)) else {
                continue;
            };

            connectors.push(Connector {
                source_id: &character.id,
                target_id: &target.id,
                relationship: &connection.relationship,
                color: &connection.color,
                source_x,
                target_x,
                source_row,
                target_row,
            });
        }
    }

    connectors
}

/// Connections of `character` whose target exists, paired with that target.
pub fn resolved_connections<'a>(character: &'a Character, cast: &'a Cast) -> Vec<(&'a Connection, &'a Character)> {
    character
        .connections
        .iter()
        .filter_map(|connection| cast.get(&connection.character_id).map(|target| (connection, target)))
        .collect()
}

/// Control points of the connector curve between two points.
///
/// The curve leaves the source vertically and enters the target vertically:
/// both inner control points sit at the vertical midpoint.
pub fn curve_control_points(source: (f32, f32), target: (f32, f32)) -> [(f32, f32); 4] {
    let mid_y = (source.1 + target.1) / 2.0;
    [source, (source.0, mid_y), (target.0, mid_y), target]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_characters;
    use crate::model::TimelinePoint;

    fn character(id: &str, years: &[i64], targets: &[&str]) -> Character {
        Character {
            id: id.to_string(),
            name: format!("Character {}", id),
            avatar: String::new(),
            story: String::new(),
            timeline_points: years.iter().map(|&y| TimelinePoint::new(y, "e")).collect(),
            connections: targets.iter().map(|&t| Connection::new(t, "Ally", "#2563eb")).collect(),
        }
    }

    #[test]
    fn test_builtin_connectors() {
        let cast = Cast::new(builtin_characters().to_vec());
        let layout = TimelineLayout::compute(cast.characters());
        let connectors = resolve_connectors(&cast, &layout);
        assert_eq!(connectors.len(), 8);

        let first = &connectors[0];
        assert_eq!((first.source_id, first.target_id), ("1", "2"));
        assert_eq!((first.source_row, first.target_row), (0, 1));
        assert_eq!(first.source_x, layout.position(0).unwrap());
        assert_eq!(first.target_x, layout.position(5).unwrap());
    }

    #[test]
    fn test_unknown_target_is_skipped() {
        let cast = Cast::new(vec![character("a", &[1], &["ghost", "b"]), character("b", &[2], &[])]);
        let layout = TimelineLayout::compute(cast.characters());
        let connectors = resolve_connectors(&cast, &layout);
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].target_id, "b");

        let resolved = resolved_connections(&cast.characters()[0], &cast);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].1.id, "b");
    }

    #[test]
    fn test_characters_without_points_have_no_connectors() {
        let cast = Cast::new(vec![character("a", &[], &["b"]), character("b", &[3], &["a"])]);
        let layout = TimelineLayout::compute(cast.characters());
        assert!(resolve_connectors(&cast, &layout).is_empty());
    }

    #[test]
    fn test_opacity_follows_hover() {
        let cast = Cast::new(vec![
            character("a", &[1], &["b"]),
            character("b", &[2], &[]),
            character("c", &[3], &[]),
        ]);
        let layout = TimelineLayout::compute(cast.characters());
        let connector = &resolve_connectors(&cast, &layout)[0];
        assert_eq!(connector.opacity(Some("a")), HIGHLIGHT_OPACITY);
        assert_eq!(connector.opacity(Some("b")), HIGHLIGHT_OPACITY);
        assert_eq!(connector.opacity(Some("c")), DIM_OPACITY);
        assert_eq!(connector.opacity(None), DIM_OPACITY);
    }

    #[test]
    fn test_curve_control_points() {
        let points = curve_control_points((10.0, 60.0), (40.0, 300.0));
        assert_eq!(points, [(10.0, 60.0), (10.0, 180.0), (40.0, 180.0), (40.0, 300.0)]);
    }
}
