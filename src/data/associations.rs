//! Clue to suspect association table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maps the exact text of a clue to the one suspect it implicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationTable {
    entries: HashMap<String, String>,
}

impl AssociationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link `clue` to `suspect`, replacing any earlier suspect for the
    /// same clue. Empty clues are ignored.
    pub fn associate(&mut self, clue: &str, suspect: &str) {
        if clue.is_empty() {
            return;
        }
        self.entries.insert(clue.to_string(), suspect.to_string());
    }

    /// The suspect a clue points to. Unknown and empty clues yield `None`.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.entries.get(clue).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: AsRef<str>, S: AsRef<str>> FromIterator<(C, S)> for AssociationTable {
    fn from_iter<I: IntoIterator<Item = (C, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (clue, suspect) in iter {
            table.associate(clue.as_ref(), suspect.as_ref());
        }
        table
    }
}
