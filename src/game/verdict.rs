//! Verdict rules for the final accusation

use crate::data::SuspectTally;
use serde::{Deserialize, Serialize};

/// Clue encounters needed before an accusation stands
pub const REQUIRED_CLUES: u32 = 2;

/// How an accusation was judged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Nobody was named
    Invalid,
    /// The accused never had a clue counted against them
    NoEvidence,
    Insufficient { count: u32 },
    Sufficient { count: u32 },
}

impl Verdict {
    pub fn is_sufficient(&self) -> bool {
        matches!(self, Verdict::Sufficient { .. })
    }

    pub fn count(&self) -> Option<u32> {
        match self {
            Verdict::Insufficient { count } | Verdict::Sufficient { count } => Some(*count),
            Verdict::Invalid | Verdict::NoEvidence => None,
        }
    }

    /// What the verdict means for the case, in words
    pub fn consequence(&self, accused: &str) -> String {
        match self {
            Verdict::Invalid => "Invalid input. Nobody was accused.".to_string(),
            Verdict::NoEvidence => {
                format!("{} has no clues collected against them during the exploration.", accused)
            }
            Verdict::Insufficient { .. } => "Not enough evidence to sustain the accusation.".to_string(),
            Verdict::Sufficient { .. } => "Enough evidence! The accusation stands.".to_string(),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Invalid => write!(f, "INVALID"),
            Verdict::NoEvidence => write!(f, "NO EVIDENCE"),
            Verdict::Insufficient { .. } => write!(f, "INSUFFICIENT"),
            Verdict::Sufficient { .. } => write!(f, "SUFFICIENT"),
        }
    }
}

/// Judge an accusation against the final tally. The name must match a
/// suspect exactly.
pub fn evaluate(tally: &SuspectTally, accused: &str) -> Verdict {
    if accused.is_empty() {
        return Verdict::Invalid;
    }
    match tally.lookup(accused) {
        None => Verdict::NoEvidence,
        Some(count) if count >= REQUIRED_CLUES => Verdict::Sufficient { count },
        Some(count) => Verdict::Insufficient { count },
    }
}
