//! Per-suspect count of clue encounters

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many distinct suspects the tally tracks unless configured otherwise
pub const DEFAULT_MAX_SUSPECTS: usize = 10;

/// One suspect and the clue encounters attributed to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub suspect: String,
    pub count: u32,
}

/// Capacity-bounded tally that remembers the order suspects first appeared in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectTally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
    capacity: usize,
}

impl SuspectTally {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            capacity,
        }
    }

    /// Count one more clue against `suspect` and return the new total.
    ///
    /// Returns `None` when the suspect is new and the tally is already
    /// full; nothing is changed in that case.
    #[must_use]
    pub fn record(&mut self, suspect: &str) -> Option<u32> {
        if let Some(&pos) = self.index.get(suspect) {
            let entry = &mut self.entries[pos];
            entry.count = entry.count.saturating_add(1);
            return Some(entry.count);
        }
        if self.is_full() {
            return None;
        }

        self.index.insert(suspect.to_string(), self.entries.len());
        self.entries.push(TallyEntry {
            suspect: suspect.to_string(),
            count: 1,
        });
        Some(1)
    }

    pub fn lookup(&self, suspect: &str) -> Option<u32> {
        self.index.get(suspect).map(|&pos| self.entries[pos].count)
    }

    /// Entries in the order they were created
    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

impl Default for SuspectTally {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SUSPECTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_counts() {
        let mut tally = SuspectTally::default();
        assert_eq!(tally.record("S"), Some(1));
        assert_eq!(tally.record("S"), Some(2));
        assert_eq!(tally.record("S"), Some(3));
        assert_eq!(tally.lookup("S"), Some(3));
        assert_eq!(tally.lookup("T"), None);
    }

    #[test]
    fn test_capacity_drops_new_suspects() {
        let mut tally = SuspectTally::with_capacity(2);
        assert_eq!(tally.record("A"), Some(1));
        assert_eq!(tally.record("B"), Some(1));
        assert_eq!(tally.record("C"), None);
        assert_eq!(tally.record("D"), None);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.lookup("C"), None);

        // Known suspects still count once full
        assert_eq!(tally.record("A"), Some(2));
    }

    #[test]
    fn test_insertion_order() {
        let mut tally = SuspectTally::default();
        let _ = tally.record("Mr Red");
        let _ = tally.record("Ms Blue");
        let _ = tally.record("Mr Red");
        let listed: Vec<(&str, u32)> = tally
            .iter()
            .map(|e| (e.suspect.as_str(), e.count))
            .collect();
        assert_eq!(listed, vec![("Mr Red", 2), ("Ms Blue", 1)]);
    }

    #[test]
    fn test_count_saturates() {
        let mut tally = SuspectTally::default();
        assert_eq!(tally.record("Mr Red"), Some(1));
        tally.entries[0].count = u32::MAX - 1;
        assert_eq!(tally.record("Mr Red"), Some(u32::MAX));
        assert_eq!(tally.record("Mr Red"), Some(u32::MAX));
        assert_eq!(tally.lookup("Mr Red"), Some(u32::MAX));
    }
}
