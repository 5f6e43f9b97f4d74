//! Leaderboard categories and rankings.

use serde::{Deserialize, Serialize};

/// One of the three independent ranking lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCategory {
    Scorers,
    Saves,
    Assists,
}

impl StatCategory {
    /// Parse a submitted category name. Unknown names are rejected so
    /// the mutation no-ops.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "scorers" => Some(Self::Scorers),
            "saves" => Some(Self::Saves),
            "assists" => Some(Self::Assists),
            _ => None,
        }
    }
}

/// A ranked name/value pair within one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub value: u32,
}

/// The three category lists, each kept sorted descending by value after
/// every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Leaderboards {
    pub scorers: Vec<LeaderboardEntry>,
    pub saves: Vec<LeaderboardEntry>,
    pub assists: Vec<LeaderboardEntry>,
}

impl Leaderboards {
    pub fn category(&self, category: StatCategory) -> &[LeaderboardEntry] {
        match category {
            StatCategory::Scorers => &self.scorers,
            StatCategory::Saves => &self.saves,
            StatCategory::Assists => &self.assists,
        }
    }

    fn category_mut(&mut self, category: StatCategory) -> &mut Vec<LeaderboardEntry> {
        match category {
            StatCategory::Scorers => &mut self.scorers,
            StatCategory::Saves => &mut self.saves,
            StatCategory::Assists => &mut self.assists,
        }
    }

    /// Overwrite the entry at `index`, or append when the index is
    /// absent or out of range, then re-sort the list descending.
    pub fn upsert(&mut self, category: StatCategory, index: Option<usize>, name: String, value: u32) {
        let list = self.category_mut(category);
        let entry = LeaderboardEntry { name, value };
        match index {
            Some(i) if i < list.len() => list[i] = entry,
            _ => list.push(entry),
        }
        list.sort_by(|a, b| b.value.cmp(&a.value));
    }

    /// Remove the entry at `index`. Out-of-range indices no-op.
    pub fn remove(&mut self, category: StatCategory, index: usize) -> bool {
        let list = self.category_mut(category);
        if index < list.len() {
            list.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entries(list: &[LeaderboardEntry]) -> Vec<(&str, u32)> {
        list.iter().map(|e| (e.name.as_str(), e.value)).collect()
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(StatCategory::parse("scorers"), Some(StatCategory::Scorers));
        assert_eq!(StatCategory::parse("saves"), Some(StatCategory::Saves));
        assert_eq!(StatCategory::parse("assists"), Some(StatCategory::Assists));
        assert_eq!(StatCategory::parse("goals"), None);
    }

    #[test]
    fn test_upsert_appends_and_sorts_descending() {
        let mut boards = Leaderboards::default();
        boards.upsert(StatCategory::Scorers, None, "Ana".to_string(), 7);
        boards.upsert(StatCategory::Scorers, None, "Bo".to_string(), 12);
        boards.upsert(StatCategory::Scorers, None, "Cy".to_string(), 9);

        assert_eq!(entries(&boards.scorers), vec![("Bo", 12), ("Cy", 9), ("Ana", 7)]);
    }

    #[test]
    fn test_upsert_out_of_range_index_appends() {
        let mut boards = Leaderboards::default();
        boards.upsert(StatCategory::Saves, None, "Ana".to_string(), 4);
        boards.upsert(StatCategory::Saves, Some(99), "Bo".to_string(), 2);

        assert_eq!(entries(&boards.saves), vec![("Ana", 4), ("Bo", 2)]);
    }

    #[test]
    fn test_upsert_in_range_index_overwrites() {
        let mut boards = Leaderboards::default();
        boards.upsert(StatCategory::Assists, None, "Ana".to_string(), 4);
        boards.upsert(StatCategory::Assists, None, "Bo".to_string(), 2);
        boards.upsert(StatCategory::Assists, Some(1), "Bo".to_string(), 9);

        assert_eq!(entries(&boards.assists), vec![("Bo", 9), ("Ana", 4)]);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut boards = Leaderboards::default();
        boards.upsert(StatCategory::Scorers, None, "Ana".to_string(), 7);

        assert!(boards.saves.is_empty());
        assert!(boards.assists.is_empty());
    }

    #[test]
    fn test_remove_by_position() {
        let mut boards = Leaderboards::default();
        boards.upsert(StatCategory::Scorers, None, "Ana".to_string(), 7);
        boards.upsert(StatCategory::Scorers, None, "Bo".to_string(), 12);

        assert!(boards.remove(StatCategory::Scorers, 0));
        assert_eq!(entries(&boards.scorers), vec![("Ana", 7)]);
        assert!(!boards.remove(StatCategory::Scorers, 5));
    }
}
