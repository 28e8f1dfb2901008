//! Narrative text for everything the player is told
//!
//! Turns engine reports into tagged log messages. The tag in brackets
//! decides how the terminal colours a line.

use super::exploration::{CaseFile, ClueFinding, Direction, RejectedCommand, RoomEntry};
use super::verdict::Verdict;
use super::GameMessage;
use crate::data::Severity;

/// Messages for a room that was just entered
pub fn room_entered(entry: &RoomEntry) -> Vec<GameMessage> {
    let mut messages = vec![GameMessage::info("ROOM", &format!("You entered: {}", entry.name))];

    match &entry.finding {
        ClueFinding::NoClue => {
            messages.push(GameMessage::info("INFO", "No clue in this room."));
        }
        ClueFinding::NoSuspect { clue } => {
            messages.push(clue_found(clue, entry.new_clue));
            messages.push(GameMessage::info(
                "INFO",
                "No suspect in the records is linked to this clue.",
            ));
        }
        ClueFinding::Attributed { clue, suspect, count } => {
            messages.push(clue_found(clue, entry.new_clue));
            messages.push(GameMessage::info(
                "SUSPECT",
                &format!("This clue points to: {} [total: {}]", suspect, count),
            ));
        }
        ClueFinding::NotRecorded { clue, suspect } => {
            messages.push(clue_found(clue, entry.new_clue));
            messages.push(GameMessage::alert(
                Severity::Medium,
                "WARN",
                &format!("This clue points to {}, but the case file has no room for another suspect.", suspect),
            ));
        }
    }

    messages
}

fn clue_found(clue: &str, new_clue: bool) -> GameMessage {
    let suffix = if new_clue { "" } else { " (already in your notes)" };
    GameMessage::info("CLUE", &format!("Clue found: \"{}\"{}", clue, suffix))
}

/// One line listing the moves on offer; exiting is always possible
pub fn exits(moves: &[(Direction, &str)]) -> GameMessage {
    let mut options: Vec<String> = moves
        .iter()
        .map(|(direction, room)| format!("({}) {} -> {}", direction.key(), direction, room))
        .collect();
    options.push("(x) exit and go to the verdict".to_string());
    GameMessage::info("EXITS", &options.join(" | "))
}

pub fn rejected(reason: &RejectedCommand) -> GameMessage {
    GameMessage::alert(Severity::Low, "ERROR", &format!("{}. Try again.", reason))
}

/// Closing summary of the clues and the suspects they point to
pub fn case_summary(case: &CaseFile) -> Vec<GameMessage> {
    let mut messages = vec![
        GameMessage::info("SYSTEM", "Exploration over. Heading to the verdict..."),
        GameMessage::info("CASE", "Collected clues (alphabetical):"),
    ];

    if case.clues.is_empty() {
        messages.push(GameMessage::info("CASE", "No clues collected."));
    } else {
        messages.extend(
            case.clues
                .iter_sorted()
                .map(|clue| GameMessage::info("CASE", &format!(" - {}", clue))),
        );
    }

    messages.push(GameMessage::info("CASE", "Clues per suspect:"));
    if case.tally.is_empty() {
        messages.push(GameMessage::info(
            "CASE",
            "No suspect identified from the collected clues.",
        ));
    } else {
        messages.extend(case.tally.iter().map(|entry| {
            GameMessage::info("CASE", &format!(" - {} : {} clue(s)", entry.suspect, entry.count))
        }));
    }

    messages
}

pub fn verdict(accused: &str, verdict: &Verdict) -> Vec<GameMessage> {
    let mut messages = Vec::new();
    if let Some(count) = verdict.count() {
        messages.push(GameMessage::info("VERDICT", &format!("Accused suspect: {}", accused)));
        messages.push(GameMessage::info(
            "VERDICT",
            &format!("Clues pointing to them: {}", count),
        ));
    }

    let (severity, tag) = match verdict {
        Verdict::Sufficient { .. } => (Severity::Info, "SUCCESS"),
        Verdict::Insufficient { .. } | Verdict::NoEvidence => (Severity::High, "FAILED"),
        Verdict::Invalid => (Severity::Low, "ERROR"),
    };
    messages.push(GameMessage::alert(severity, tag, &verdict.consequence(accused)));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RoomId;
    use crate::game::exploration::Exploration;
    use crate::data::Fixture;

    fn lines(messages: &[GameMessage]) -> Vec<String> {
        messages.iter().map(GameMessage::line).collect()
    }

    fn entrance() -> RoomId {
        Fixture::manor().build_mansion().unwrap().root()
    }

    #[test]
    fn test_attributed_entry_text() {
        let entry = RoomEntry {
            room: entrance(),
            name: "Library".to_string(),
            finding: ClueFinding::Attributed {
                clue: "Torn book".to_string(),
                suspect: "Ms Blue".to_string(),
                count: 1,
            },
            new_clue: true,
        };
        assert_eq!(
            lines(&room_entered(&entry)),
            vec![
                "[ROOM] You entered: Library",
                "[CLUE] Clue found: \"Torn book\"",
                "[SUSPECT] This clue points to: Ms Blue [total: 1]",
            ]
        );
    }

    #[test]
    fn test_not_recorded_shows_no_count() {
        let entry = RoomEntry {
            room: entrance(),
            name: "Attic".to_string(),
            finding: ClueFinding::NotRecorded {
                clue: "Cigar ash".to_string(),
                suspect: "Col Mustard".to_string(),
            },
            new_clue: false,
        };
        let messages = room_entered(&entry);
        assert_eq!(messages[2].severity, Severity::Medium);
        assert!(!messages[2].message.contains("total"));
        assert!(messages[1].message.ends_with("(already in your notes)"));
    }

    #[test]
    fn test_exit_always_offered() {
        let line = exits(&[]).line();
        assert_eq!(line, "[EXITS] (x) exit and go to the verdict");
    }

    #[test]
    fn test_empty_case_summary() {
        let fixture = Fixture::from_toml_str(
            r#"
            root = "Hall"

            [[room]]
            name = "Hall"
            "#,
        )
        .unwrap();
        let (exploration, _) = Exploration::begin(
            fixture.build_mansion().unwrap(),
            fixture.build_associations(),
            fixture.max_suspects,
        );
        let text = lines(&case_summary(&exploration.case_file()));
        assert!(text.contains(&"[CASE] No clues collected.".to_string()));
        assert!(text.contains(&"[CASE] No suspect identified from the collected clues.".to_string()));
    }

    #[test]
    fn test_invalid_verdict_text() {
        let text = lines(&verdict("", &Verdict::Invalid));
        assert_eq!(text, vec!["[ERROR] Invalid input. Nobody was accused."]);
    }
}
