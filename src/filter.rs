//! Free-text name filter for the displayed characters.

use crate::model::Character;

/// Returns true if `name` contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Characters whose name contains `query` case-insensitively, in cast order.
pub fn filter_by_name<'a>(characters: &'a [Character], query: &str) -> Vec<&'a Character> {
    let needle = query.to_lowercase();
    characters
        .iter()
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_characters;

    fn names<'a>(chars: &[&'a Character]) -> Vec<&'a str> {
        chars.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(filter_by_name(builtin_characters(), "").len(), 4);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let found = filter_by_name(builtin_characters(), "ECHO");
        assert_eq!(names(&found), vec!["Chronos Echo"]);

        let found = filter_by_name(builtin_characters(), "r");
        assert_eq!(names(&found), vec!["Astra Prime", "Void Harbinger", "Chronos Echo"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_by_name(builtin_characters(), "zzz").is_empty());
    }

    #[test]
    fn test_filter_agrees_with_name_matches() {
        for query in ["", "a", "NEX", "-7", "prime ", "Void H"] {
            let expected: Vec<&str> = builtin_characters()
                .iter()
                .filter(|c| name_matches(&c.name, query))
                .map(|c| c.name.as_str())
                .collect();
            assert_eq!(names(&filter_by_name(builtin_characters(), query)), expected);
        }
    }
}
