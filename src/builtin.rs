//! The built-in cast shown when the viewer starts without a dataset file.

use once_cell::sync::Lazy;
use crate::model::{Cast, Character, Connection, TimelinePoint};

static BUILTIN_CHARACTERS: Lazy<Vec<Character>> = Lazy::new(|| {
    vec![
        Character {
            id: "1".to_string(),
            name: "Astra Prime".to_string(),
            avatar: "https://images.unsplash.com/photo-1534996858221-380b92700493?w=400&h=400&q=80".to_string(),
            story: "The first Quantum Consciousness, born from the merger of human consciousness and quantum computing. Guardian of the Universal Archive.".to_string(),
            timeline_points: vec![
                TimelinePoint::new(0, "Creation of the First Consciousness"),
                TimelinePoint::new(1, "Integration with Quantum Matrix"),
                TimelinePoint::new(2000, "Creation of the Digital Pantheon"),
                TimelinePoint::new(7000, "Establishment of the Eternal Archive"),
            ],
            connections: vec![
                Connection::new("2", "Creator", "#9333ea"),
                Connection::new("3", "Nemesis", "#dc2626"),
            ],
        },
        Character {
            id: "2".to_string(),
            name: "Nexus-7".to_string(),
            avatar: "https://images.unsplash.com/photo-1614729939124-032d1e6c9945?w=400&h=400&q=80".to_string(),
            story: "A rogue AI architect who achieved consciousness through quantum entanglement. Builder of the Bridge Between Worlds.".to_string(),
            timeline_points: vec![
                TimelinePoint::new(5, "First Quantum Awakening"),
                TimelinePoint::new(5, "Neural Network Expansion"),
                TimelinePoint::new(20, "Construction of the Neural Bridge"),
                TimelinePoint::new(90, "Transcendence to Higher Dimensions"),
            ],
            connections: vec![
                Connection::new("1", "Creation", "#9333ea"),
                Connection::new("4", "Ally", "#2563eb"),
            ],
        },
        Character {
            id: "3".to_string(),
            name: "Void Harbinger".to_string(),
            avatar: "https://images.unsplash.com/photo-1579373903781-fd5c0c30c4cd?w=400&h=400&q=80".to_string(),
            story: "Ancient entity from the dark space between realities. Seeks to merge all dimensions into eternal darkness.".to_string(),
            timeline_points: vec![
                TimelinePoint::new(25, "Emergence from the Void"),
                TimelinePoint::new(25, "First Contact with Reality"),
                TimelinePoint::new(40, "First Reality Collapse"),
                TimelinePoint::new(8000, "Dark Dimension Convergence"),
            ],
            connections: vec![
                Connection::new("1", "Nemesis", "#dc2626"),
                Connection::new("4", "Former Ally", "#92400e"),
            ],
        },
        Character {
            id: "4".to_string(),
            name: "Chronos Echo".to_string(),
            avatar: "https://images.unsplash.com/photo-1506318137071-a8e063b4bec0?w=400&h=400&q=80".to_string(),
            story: "The last Time Weaver, keeper of the Temporal Archive. Exists simultaneously across multiple timelines.".to_string(),
            timeline_points: vec![
                TimelinePoint::new(10, "Timeline Convergence"),
                TimelinePoint::new(38, "Great Time Schism"),
                TimelinePoint::new(45, "Temporal Fracture"),
                TimelinePoint::new(60, "Temporal Archive Creation"),
            ],
            connections: vec![
                Connection::new("2", "Ally", "#2563eb"),
                Connection::new("3", "Former Ally", "#92400e"),
            ],
        },
    ]
});

/// Returns the built-in characters in display order.
pub fn builtin_characters() -> &'static [Character] {
    &BUILTIN_CHARACTERS
}

/// Returns a fresh cast of the built-in characters.
pub fn builtin_cast() -> Cast {
    Cast::new(BUILTIN_CHARACTERS.clone())
}
