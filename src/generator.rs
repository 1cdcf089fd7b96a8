//! Seeded random cast generation for demos and stress testing.
//!
//! The same configuration always produces the same cast.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{Character, Connection, TimelinePoint};

const NAME_PREFIXES: &[&str] = &[
    "Astra", "Nexus", "Void", "Chronos", "Lumen", "Vesper", "Orion", "Kael",
    "Seren", "Talon", "Nyx", "Halcyon", "Rune", "Ember", "Solace", "Quill",
];

const NAME_SUFFIXES: &[&str] = &[
    "Prime", "Echo", "Harbinger", "Warden", "Drifter", "Oracle", "Weaver",
    "Sentinel", "Exile", "Herald", "Architect", "Shade",
];

const EVENTS: &[&str] = &[
    "Awakening", "First Contact", "The Long Silence", "Great Schism",
    "Founding of the Archive", "Fall of the Citadel", "Exile", "Return",
    "Ascension", "Reality Collapse", "Treaty of Stars", "Last Stand",
];

/// (relationship, color)
const RELATIONSHIPS: &[(&str, &str)] = &[
    ("Creator", "#9333ea"),
    ("Nemesis", "#dc2626"),
    ("Ally", "#2563eb"),
    ("Former Ally", "#92400e"),
    ("Mentor", "#059669"),
    ("Rival", "#d97706"),
];

/// Parameters of a generated cast.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub characters: usize,
    pub seed: u64,
    /// Inclusive range of timeline points per character
    pub points_per_character: (usize, usize),
    /// Maximum outgoing connections per character
    pub max_connections: usize,
    /// Number of eras; each era is a dense cluster of years
    pub eras: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            characters: 8,
            seed: 42,
            points_per_character: (2, 5),
            max_connections: 2,
            eras: 3,
        }
    }
}

/// Generates a cast with unique ids `"1"..="n"`.
///
/// Years are drawn from a few eras separated by large gaps, so the layout shows
/// several sections.
pub fn generate_characters(config: &GeneratorConfig) -> Vec<Character> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let eras = config.eras.max(1);
    let era_starts: Vec<i64> = (0..eras)
        .map(|i| i as i64 * 1000 + rng.gen_range(0..200))
        .collect();

    let (min_points, max_points) = config.points_per_character;
    let max_points = max_points.max(min_points);

    let mut characters: Vec<Character> = (0..config.characters)
        .map(|index| {
            let name = format!(
                "{} {}",
                NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())],
                NAME_SUFFIXES[rng.gen_range(0..NAME_SUFFIXES.len())]
            );

            let point_count = rng.gen_range(min_points..=max_points);
            let mut timeline_points: Vec<TimelinePoint> = (0..point_count)
                .map(|_| {
                    let era = era_starts[rng.gen_range(0..eras)];
                    let year = era + rng.gen_range(0..=90);
                    let event = EVENTS[rng.gen_range(0..EVENTS.len())];
                    TimelinePoint::new(year, event)
                })
                .collect();
            timeline_points.sort_by_key(|p| p.year);

            Character {
                id: (index + 1).to_string(),
                story: format!("{} wanders the timeline, appearing in {} recorded events.", name, point_count),
                avatar: format!("https://example.invalid/avatars/{}.png", index + 1),
                name,
                timeline_points,
                connections: Vec::new(),
            }
        })
        .collect();

    let ids: Vec<String> = characters.iter().map(|c| c.id.clone()).collect();
    for character in &mut characters {
        let count = rng.gen_range(0..=config.max_connections);
        let targets: Vec<&String> = ids
            .iter()
            .filter(|id| **id != character.id)
            .collect::<Vec<_>>()
            .choose_multiple(&mut rng, count)
            .copied()
            .collect();
        character.connections = targets
            .into_iter()
            .map(|target| {
                let (relationship, color) = RELATIONSHIPS[rng.gen_range(0..RELATIONSHIPS.len())];
                Connection::new(target.clone(), relationship, color)
            })
            .collect();
    }

    characters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TimelineLayout;
    use crate::model::Cast;

    #[test]
    fn test_deterministic() {
        let config = GeneratorConfig::default();
        assert_eq!(generate_characters(&config), generate_characters(&config));
    }

    #[test]
    fn test_shape() {
        let config = GeneratorConfig { characters: 20, seed: 3, ..GeneratorConfig::default() };
        let characters = generate_characters(&config);
        assert_eq!(characters.len(), 20);

        let cast = Cast::try_new(characters).unwrap();
        assert_eq!(cast.unresolved_connections(), 0);
        for character in cast.iter() {
            assert!((2..=5).contains(&character.timeline_points.len()));
            assert!(character.connections.len() <= 2);
            assert!(character.connections.iter().all(|c| c.character_id != character.id));
        }
    }

    #[test]
    fn test_eras_become_sections() {
        let config = GeneratorConfig { characters: 40, eras: 3, ..GeneratorConfig::default() };
        let layout = TimelineLayout::compute(&generate_characters(&config));
        assert!(layout.sections().len() <= 3);
        assert!(layout.sections().len() >= 2);
    }

    #[test]
    fn test_empty() {
        let config = GeneratorConfig { characters: 0, ..GeneratorConfig::default() };
        assert!(generate_characters(&config).is_empty());
    }
}
