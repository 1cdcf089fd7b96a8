//! Character data model.
//!
//! Characters are loaded once (from the built-in cast, a dataset file or the
//! generator) and never mutated afterwards. Field names on the wire follow the
//! camelCase layout of the dataset files (`timelinePoints`, `characterId`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single (year, event) fact anchoring a character at a point in the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub year: i64,
    pub event: String,
}

impl TimelinePoint {
    pub fn new(year: i64, event: impl Into<String>) -> Self {
        Self { year, event: event.into() }
    }
}

/// Directed relationship from one character to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Identifier of the target character. May not resolve.
    pub character_id: String,
    pub relationship: String,
    /// Display color as `#rrggbb`
    pub color: String,
}

impl Connection {
    pub fn new(character_id: impl Into<String>, relationship: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            relationship: relationship.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Avatar reference (usually an image URL)
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub timeline_points: Vec<TimelinePoint>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Character {
    /// Year of the first timeline point, which anchors the character's connectors.
    pub fn first_year(&self) -> Option<i64> {
        self.timeline_points.first().map(|p| p.year)
    }

    /// Up to two uppercase initials of the display name, used for avatar tiles.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// The ordered set of characters on display.
///
/// Row order is dataset order; `index_of` gives the row a character is drawn in.
#[derive(Debug, Clone, Default)]
pub struct Cast {
    characters: Vec<Character>,
    index_by_id: HashMap<String, usize>,
}

impl Cast {
    /// Builds a cast, keeping the first character for any repeated identifier.
    ///
    /// Use [`Cast::try_new`] to reject duplicates instead.
    pub fn new(characters: Vec<Character>) -> Self {
        let mut index_by_id = HashMap::with_capacity(characters.len());
        for (index, character) in characters.iter().enumerate() {
            index_by_id.entry(character.id.clone()).or_insert(index);
        }
        Self { characters, index_by_id }
    }

    /// Builds a cast, returning the first identifier that appears twice.
    pub fn try_new(characters: Vec<Character>) -> Result<Self, String> {
        let mut index_by_id = HashMap::with_capacity(characters.len());
        for (index, character) in characters.iter().enumerate() {
            if index_by_id.insert(character.id.clone(), index).is_some() {
                return Err(character.id.clone());
            }
        }
        Ok(Self { characters, index_by_id })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Character> {
        self.index_by_id.get(id).map(|&i| &self.characters[i])
    }

    /// Row index of a character in the full cast.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn total_events(&self) -> usize {
        self.characters.iter().map(|c| c.timeline_points.len()).sum()
    }

    pub fn total_connections(&self) -> usize {
        self.characters.iter().map(|c| c.connections.len()).sum()
    }

    /// Number of connections whose target does not exist in this cast.
    pub fn unresolved_connections(&self) -> usize {
        self.characters
            .iter()
            .flat_map(|c| c.connections.iter())
            .filter(|conn| !self.index_by_id.contains_key(&conn.character_id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: &str, name: &str) -> Character {
        Character {
            id: id.to_string(),
            name: name.to_string(),
            avatar: String::new(),
            story: String::new(),
            timeline_points: vec![],
            connections: vec![],
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(character("1", "Astra Prime").initials(), "AP");
        assert_eq!(character("2", "Nexus-7").initials(), "N7");
        assert_eq!(character("3", "void harbinger of night").initials(), "VH");
        assert_eq!(character("4", "   ").initials(), "?");
    }

    #[test]
    fn test_cast_lookup() {
        let cast = Cast::new(vec![character("a", "A"), character("b", "B")]);
        assert_eq!(cast.index_of("b"), Some(1));
        assert_eq!(cast.get("a").map(|c| c.name.as_str()), Some("A"));
        assert!(cast.get("zzz").is_none());
    }

    #[test]
    fn test_try_new_rejects_duplicates() {
        let result = Cast::try_new(vec![character("a", "A"), character("a", "Again")]);
        assert_eq!(result.unwrap_err(), "a");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r##"{
            "id": "9",
            "name": "Test",
            "avatar": "x.png",
            "story": "s",
            "timelinePoints": [{"year": -3, "event": "born"}],
            "connections": [{"characterId": "1", "relationship": "Ally", "color": "#2563eb"}]
        }"##;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.first_year(), Some(-3));
        assert_eq!(c.connections[0].character_id, "1");
    }
}
