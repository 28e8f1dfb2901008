//! Core game logic and state management

pub mod exploration;
pub mod narrative;
pub mod verdict;

use crate::data::*;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use exploration::{CaseFile, Command, Direction, Exploration, StepOutcome};
use serde::{Deserialize, Serialize};
use verdict::Verdict;

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Current game phase
    pub phase: GamePhase,

    /// The walk through the mansion
    pub exploration: Exploration,

    /// Findings frozen when the player leaves for the verdict
    pub case_file: Option<CaseFile>,

    /// Game statistics
    pub stats: GameStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,
}

/// Current phase of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Accusation,
    Concluded { accused: String, verdict: Verdict },
}

/// Game statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub rooms_entered: u32,
    pub rejected_commands: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub source: String,
    pub message: String,
}

impl GameMessage {
    pub fn info(source: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity: Severity::Info,
            source: source.to_string(),
            message: message.to_string(),
        }
    }

    pub fn alert(severity: Severity, source: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            source: source.to_string(),
            message: message.to_string(),
        }
    }

    /// The message as shown in the terminal, tag first
    pub fn line(&self) -> String {
        format!("[{}] {}", self.source, self.message)
    }
}

impl Game {
    /// Build the mansion and records from a fixture and enter the first room
    pub fn new(fixture: &Fixture) -> Result<Self> {
        if fixture.max_suspects == 0 {
            return Err(GameError::InvalidCapacity.into());
        }
        let mansion = fixture.build_mansion()?;
        let associations = fixture.build_associations();
        let (exploration, entry) = Exploration::begin(mansion, associations, fixture.max_suspects);

        let mut game = Self {
            phase: GamePhase::Exploring,
            exploration,
            case_file: None,
            stats: GameStats::default(),
            message_log: Vec::new(),
        };

        game.add_message(GameMessage::info(
            "SYSTEM",
            "Detective Quest: explore the mansion, collect clues and accuse the culprit!",
        ));
        game.record_entry(&entry);
        Ok(game)
    }

    /// Add a message to the log
    pub fn add_message(&mut self, message: GameMessage) {
        self.message_log.push(message);
    }

    fn log_all(&mut self, messages: Vec<GameMessage>) -> Vec<String> {
        let lines = messages.iter().map(GameMessage::line).collect();
        self.message_log.extend(messages);
        lines
    }

    fn record_entry(&mut self, entry: &exploration::RoomEntry) -> Vec<String> {
        self.stats.rooms_entered = self.stats.rooms_entered.saturating_add(1);
        self.log_all(narrative::room_entered(entry))
    }

    /// Execute a player command and return the lines to show
    pub fn execute_command(&mut self, command: Command) -> Vec<String> {
        if self.phase != GamePhase::Exploring {
            return vec!["[ERROR] The exploration is over.".to_string()];
        }

        match self.exploration.step(command) {
            Ok(StepOutcome::Entered(entry)) => self.record_entry(&entry),
            Ok(StepOutcome::Exited) => {
                let case = self.exploration.case_file();
                let lines = self.log_all(narrative::case_summary(&case));
                self.case_file = Some(case);
                self.phase = GamePhase::Accusation;
                lines
            }
            Err(reason) => {
                self.stats.rejected_commands = self.stats.rejected_commands.saturating_add(1);
                self.log_all(vec![narrative::rejected(&reason)])
            }
        }
    }

    /// Parse a typed command and execute it. Unparseable input is
    /// rejected like an impossible move.
    pub fn execute_input(&mut self, input: &str) -> Vec<String> {
        match input.parse::<Command>() {
            Ok(command) => self.execute_command(command),
            Err(reason) => {
                self.stats.rejected_commands = self.stats.rejected_commands.saturating_add(1);
                self.log_all(vec![narrative::rejected(&reason)])
            }
        }
    }

    /// Judge the accusation against the tally. Only valid once the
    /// exploration has ended; the accusation is taken once.
    pub fn accuse(&mut self, accused: &str) -> Vec<String> {
        let Some(case) = &self.case_file else {
            return vec!["[ERROR] Finish exploring before making an accusation.".to_string()];
        };
        if self.phase != GamePhase::Accusation {
            return vec!["[ERROR] The accusation has already been made.".to_string()];
        }

        let verdict = verdict::evaluate(&case.tally, accused);
        self.phase = GamePhase::Concluded {
            accused: accused.to_string(),
            verdict,
        };
        self.log_all(narrative::verdict(accused, &verdict))
    }

    /// Moves open from the current room
    pub fn available_moves(&self) -> Vec<(Direction, &str)> {
        self.exploration.available_moves()
    }

    /// The exits line for the current room
    pub fn exits_line(&self) -> String {
        narrative::exits(&self.available_moves()).line()
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match &self.phase {
            GamePhase::Concluded { verdict, .. } => Some(*verdict),
            _ => None,
        }
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        format!(
            "Rooms entered: {} | Clues: {} | Suspects: {}/{} | Rejected: {}",
            self.stats.rooms_entered,
            self.exploration.clues().len(),
            self.exploration.tally().len(),
            self.exploration.tally().capacity(),
            self.stats.rejected_commands,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_enters_entrance() {
        let game = Game::new(&Fixture::manor()).unwrap();
        assert_eq!(game.phase, GamePhase::Exploring);
        assert_eq!(game.stats.rooms_entered, 1);
        assert!(game
            .message_log
            .iter()
            .any(|m| m.line() == "[ROOM] You entered: Entrance Hall"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut fixture = Fixture::manor();
        fixture.max_suspects = 0;
        assert!(Game::new(&fixture).is_err());
    }

    #[test]
    fn test_rejected_input_counts() {
        let mut game = Game::new(&Fixture::manor()).unwrap();
        let lines = game.execute_input("q");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[ERROR]"));
        game.execute_command(Command::Go(Direction::Back));
        assert_eq!(game.stats.rejected_commands, 2);
        assert_eq!(game.stats.rooms_entered, 1);
    }

    #[test]
    fn test_status_counts_clues_and_suspects() {
        let mut game = Game::new(&Fixture::manor()).unwrap();
        game.execute_input("l");
        game.execute_input("b");
        assert_eq!(game.stats.rooms_entered, 3);
        assert_eq!(
            game.check_status(),
            "Rooms entered: 3 | Clues: 2 | Suspects: 2/10 | Rejected: 0"
        );
    }

    #[test]
    fn test_accusation_requires_exit() {
        let mut game = Game::new(&Fixture::manor()).unwrap();
        let lines = game.accuse("Mr Green");
        assert!(lines[0].starts_with("[ERROR]"));
        assert_eq!(game.verdict(), None);
    }

    #[test]
    fn test_full_round() {
        let mut game = Game::new(&Fixture::manor()).unwrap();
        game.execute_input("l");
        game.execute_input("r");
        game.execute_input("x");
        assert_eq!(game.phase, GamePhase::Accusation);

        // Hall and Garden both point to Mr Green
        game.accuse("Mr Green");
        assert_eq!(game.verdict(), Some(Verdict::Sufficient { count: 2 }));

        let again = game.accuse("Ms Blue");
        assert!(again[0].starts_with("[ERROR]"));
        assert_eq!(game.verdict(), Some(Verdict::Sufficient { count: 2 }));
    }
}
