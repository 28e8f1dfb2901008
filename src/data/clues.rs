//! Clues the player has picked up

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Duplicate-free set of discovered clues, always enumerated in
/// ascending byte-wise order. Case is kept exactly as found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueCollection {
    clues: BTreeSet<String>,
}

impl ClueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a clue. Returns `true` when the clue was not already filed;
    /// empty clues are ignored.
    pub fn insert(&mut self, clue: &str) -> bool {
        if clue.is_empty() || self.clues.contains(clue) {
            return false;
        }
        self.clues.insert(clue.to_string())
    }

    pub fn contains(&self, clue: &str) -> bool {
        self.clues.contains(clue)
    }

    /// All clues in alphabetical order. Restartable: every call yields
    /// the same sequence for the same set of clues.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &str> {
        self.clues.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_enumeration() {
        let mut clues = ClueCollection::new();
        clues.insert("Zeta");
        clues.insert("Alpha");
        clues.insert("Mike");
        let sorted: Vec<&str> = clues.iter_sorted().collect();
        assert_eq!(sorted, vec!["Alpha", "Mike", "Zeta"]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut clues = ClueCollection::new();
        assert!(clues.insert("Torn book"));
        for _ in 0..4 {
            assert!(!clues.insert("Torn book"));
        }
        assert_eq!(clues.len(), 1);
        assert_eq!(clues.iter_sorted().collect::<Vec<_>>(), vec!["Torn book"]);
    }

    #[test]
    fn test_empty_clue_ignored() {
        let mut clues = ClueCollection::new();
        assert!(!clues.insert(""));
        assert!(clues.is_empty());
    }

    #[test]
    fn test_case_is_not_normalised() {
        let mut clues = ClueCollection::new();
        clues.insert("match");
        clues.insert("Match");
        assert_eq!(clues.len(), 2);
        // Uppercase sorts before lowercase byte-wise
        assert_eq!(clues.iter_sorted().collect::<Vec<_>>(), vec!["Match", "match"]);
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let mut clues = ClueCollection::new();
        clues.insert("b");
        clues.insert("a");
        let first: Vec<&str> = clues.iter_sorted().collect();
        let second: Vec<&str> = clues.iter_sorted().collect();
        assert_eq!(first, second);
    }
}
