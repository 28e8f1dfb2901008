//! Data structures for the game world
//!
//! Defines the mansion map, the clue collection, the clue to suspect
//! association table, the suspect tally and the startup fixture.

pub mod associations;
pub mod clues;
pub mod fixture;
pub mod mansion;
pub mod tally;

pub use associations::*;
pub use clues::*;
pub use fixture::*;
pub use mansion::*;
pub use tally::*;

use serde::{Deserialize, Serialize};

/// Severity levels for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Low => "◆",
            Severity::Medium => "▲",
            Severity::High => "●",
        }
    }
}
